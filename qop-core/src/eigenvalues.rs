//! Memoized Pauli eigenvalue spectra
//!
//! The eigenvalues of an n-fold tensor product of a σz-like two-level
//! operator: eigenvalues of a tensor product are products of the factor
//! eigenvalues, so each added qubit appends the negated prior half,
//! spectrum(n) = spectrum(n-1) ++ -spectrum(n-1). Measurement paths request
//! the same spectra repeatedly, so results are cached for the cache's
//! lifetime.

use crate::{OperationError, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Cache of Pauli product eigenvalue spectra, keyed by qubit count
///
/// Owned by the simulator context rather than living in ambient global
/// state. Safe to share across threads; a race on first computation
/// recomputes the (pure) spectrum but never leaves the map inconsistent.
///
/// # Example
/// ```
/// use qop_core::PauliEigenvalueCache;
///
/// let cache = PauliEigenvalueCache::new();
/// let spectrum = cache.eigenvalues(2).unwrap();
/// assert_eq!(&spectrum[..], &[1.0, -1.0, -1.0, 1.0]);
/// ```
#[derive(Debug, Default)]
pub struct PauliEigenvalueCache {
    table: RwLock<HashMap<usize, Arc<[f64]>>>,
}

impl PauliEigenvalueCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache with spectra precomputed for 1..=max_qubits
    ///
    /// Bounds the cache up front so the hot path never takes the write
    /// lock for realistic circuit sizes.
    pub fn with_max_qubits(max_qubits: usize) -> Self {
        let mut table = HashMap::with_capacity(max_qubits);
        for num_qubits in 1..=max_qubits {
            table.insert(num_qubits, Self::generate(num_qubits));
        }
        Self {
            table: RwLock::new(table),
        }
    }

    /// The ±1 eigenvalue spectrum for a Pauli product on `num_qubits` qubits
    ///
    /// The result has length 2^num_qubits and is shared: repeated calls for
    /// the same qubit count return the same allocation.
    ///
    /// # Errors
    /// Returns [`OperationError::InvalidArgument`] if `num_qubits < 1`.
    pub fn eigenvalues(&self, num_qubits: usize) -> Result<Arc<[f64]>> {
        if num_qubits < 1 {
            return Err(OperationError::invalid_argument(
                "Pauli eigenvalues require at least 1 qubit",
            ));
        }

        if let Some(spectrum) = self.table.read().get(&num_qubits) {
            return Ok(Arc::clone(spectrum));
        }

        // Computed outside the write lock; a concurrent loser's result is
        // identical, so keep whichever entry landed first.
        let spectrum = Self::generate(num_qubits);
        let mut table = self.table.write();
        Ok(Arc::clone(
            table.entry(num_qubits).or_insert(spectrum),
        ))
    }

    /// Number of cached spectra
    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    /// Whether the cache holds no spectra
    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }

    fn generate(num_qubits: usize) -> Arc<[f64]> {
        let mut spectrum = Vec::with_capacity(1 << num_qubits);
        spectrum.extend([1.0, -1.0]);
        for _ in 1..num_qubits {
            let negated: Vec<f64> = spectrum.iter().map(|v| -v).collect();
            spectrum.extend(negated);
        }
        spectrum.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_qubit_spectrum() {
        let cache = PauliEigenvalueCache::new();
        assert_eq!(&cache.eigenvalues(1).unwrap()[..], &[1.0, -1.0]);
    }

    #[test]
    fn test_two_qubit_spectrum() {
        let cache = PauliEigenvalueCache::new();
        assert_eq!(&cache.eigenvalues(2).unwrap()[..], &[1.0, -1.0, -1.0, 1.0]);
    }

    #[test]
    fn test_spectrum_length_and_values() {
        let cache = PauliEigenvalueCache::new();
        for n in 1..=8 {
            let spectrum = cache.eigenvalues(n).unwrap();
            assert_eq!(spectrum.len(), 1 << n);
            assert!(spectrum.iter().all(|&v| v == 1.0 || v == -1.0));
        }
    }

    #[test]
    fn test_doubling_recurrence() {
        let cache = PauliEigenvalueCache::new();
        for n in 2..=8 {
            let half = cache.eigenvalues(n - 1).unwrap();
            let full = cache.eigenvalues(n).unwrap();
            assert_eq!(&full[..half.len()], &half[..]);
            let negated: Vec<f64> = half.iter().map(|v| -v).collect();
            assert_eq!(&full[half.len()..], &negated[..]);
        }
    }

    #[test]
    fn test_zero_qubits_rejected() {
        let cache = PauliEigenvalueCache::new();
        assert!(matches!(
            cache.eigenvalues(0),
            Err(OperationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_repeated_calls_share_allocation() {
        let cache = PauliEigenvalueCache::new();
        let first = cache.eigenvalues(3).unwrap();
        let second = cache.eigenvalues(3).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_precomputed_cache() {
        let cache = PauliEigenvalueCache::with_max_qubits(5);
        assert_eq!(cache.len(), 5);
        assert_eq!(cache.eigenvalues(4).unwrap().len(), 16);
        // Beyond the precomputed bound still works
        assert_eq!(cache.eigenvalues(6).unwrap().len(), 64);
        assert_eq!(cache.len(), 6);
    }

    #[test]
    fn test_concurrent_first_requests() {
        let cache = Arc::new(PauliEigenvalueCache::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.eigenvalues(10).unwrap())
            })
            .collect();
        let spectra: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for spectrum in &spectra {
            assert_eq!(spectrum.len(), 1024);
            assert_eq!(spectrum[..], spectra[0][..]);
        }
        assert_eq!(cache.len(), 1);
    }
}
