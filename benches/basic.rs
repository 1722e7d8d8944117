use criterion::{criterion_group, criterion_main, Criterion};
use serial_factory::port::{MockDriver, Parity, SerialPortConfig, SerialPortFactory, StopBits};
use std::hint::black_box;
use std::time::Duration;

pub fn bench_translation(c: &mut Criterion) {
    let config = SerialPortConfig {
        baud: 115_200,
        read_timeout: Duration::from_millis(500),
        size: 8,
        parity: Parity::EVEN,
        stop_bits: StopBits::TWO,
    };

    c.bench_function("translate_config", |b| {
        b.iter(|| {
            let factory = SerialPortFactory::with_driver(
                "/dev/ttyUSB0",
                black_box(&config),
                MockDriver::new(),
            );
            black_box(factory)
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_millis(300))
        .measurement_time(Duration::from_secs(2));
    targets = bench_translation
}
criterion_main!(benches);
