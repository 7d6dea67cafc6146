use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qop_core::{check_cptp, check_unitary, Complex64, PauliEigenvalueCache, SquareMatrix};

fn permutation_matrix(dimension: usize) -> SquareMatrix {
    let mut elements = vec![Complex64::new(0.0, 0.0); dimension * dimension];
    for i in 0..dimension {
        let j = (i + 1) % dimension;
        elements[i * dimension + j] = Complex64::new(1.0, 0.0);
    }
    SquareMatrix::new(elements, dimension).unwrap()
}

/// Benchmark the unitarity check across gate sizes
fn bench_check_unitary(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_unitary");

    for num_qubits in [1usize, 2, 3, 4, 5].iter() {
        let dimension = 1 << num_qubits;
        let matrix = permutation_matrix(dimension);

        group.throughput(Throughput::Elements((dimension * dimension) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            num_qubits,
            |b, _| {
                b.iter(|| {
                    check_unitary(black_box(&matrix)).unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the CPTP check for projector sets of growing dimension
fn bench_check_cptp(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_cptp");

    for num_qubits in [1usize, 2, 3].iter() {
        let dimension = 1 << num_qubits;
        let matrices: Vec<SquareMatrix> = (0..dimension)
            .map(|k| {
                let mut elements = vec![Complex64::new(0.0, 0.0); dimension * dimension];
                elements[k * dimension + k] = Complex64::new(1.0, 0.0);
                SquareMatrix::new(elements, dimension).unwrap()
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            num_qubits,
            |b, _| {
                b.iter(|| {
                    check_cptp(black_box(&matrices)).unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark hot-path eigenvalue lookups against a warm cache
fn bench_eigenvalue_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("pauli_eigenvalues");

    let cache = PauliEigenvalueCache::with_max_qubits(20);
    for num_qubits in [1usize, 5, 10, 20].iter() {
        group.bench_with_input(
            BenchmarkId::new("warm", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| {
                    let spectrum = cache.eigenvalues(black_box(n)).unwrap();
                    black_box(spectrum);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_check_unitary,
    bench_check_cptp,
    bench_eigenvalue_lookup
);
criterion_main!(benches);
