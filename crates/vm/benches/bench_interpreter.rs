//! Benchmarks for the interpreter loop.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lunar_common::utils::strings::decode_hex;
use lunar_vm::{Evm, Fork};

/// PUSH1 1, then 500 rounds of PUSH1 3, MUL, PUSH1 2, EXP, PUSH1 7, ADD.
fn arithmetic_code() -> Vec<u8> {
    let mut code = vec![0x60, 0x01];
    for _ in 0..500 {
        code.extend_from_slice(&[0x60, 0x03, 0x02, 0x60, 0x02, 0x0a, 0x60, 0x07, 0x01]);
    }
    code
}

/// 1000 MSTOREs walking up memory one word at a time.
fn memory_code() -> Vec<u8> {
    let mut code = Vec::new();
    for word in 0u16..1000 {
        let [high, low] = (word * 32).to_be_bytes();
        code.extend_from_slice(&[0x60, 0xff, 0x61, high, low, 0x52]);
    }
    code
}

fn test_interpreter(c: &mut Criterion) {
    let mut group = c.benchmark_group("lunar_vm");
    let evm = Evm::new(Fork::Moon);

    let cases = [
        ("arithmetic", arithmetic_code()),
        ("memory", memory_code()),
        (
            "trapesys",
            decode_hex("60016020526002606452600361ff0052600362ffffff526005601053")
                .expect("invalid bytecode"),
        ),
    ];

    group.sample_size(100);
    for (name, code) in cases {
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| {
                let result = evm.execute(&code, u64::MAX);
                assert!(result.is_success());
                result
            });
        });
    }

    group.finish();
}

criterion_group!(benches, test_interpreter);
criterion_main!(benches);
