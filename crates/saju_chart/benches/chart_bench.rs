use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_chart::{ChartConfig, Gender, compute_four_pillars_with};
use saju_solar::{LunarDate, SolarTerm, SolarTermTable, TableRange, global_table, solar_term_instant};
use saju_time::CivilDate;

fn chart_bench(c: &mut Criterion) {
    let table = global_table();
    let config = ChartConfig::default();

    let mut group = c.benchmark_group("chart");
    group.bench_function("compute_four_pillars", |b| {
        b.iter(|| {
            compute_four_pillars_with(
                black_box(table),
                black_box(&config),
                black_box("1990-05-15"),
                black_box("14:30"),
                Gender::Male,
            )
            .expect("chart should compute")
        })
    });
    group.finish();
}

fn solar_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("solar");
    group.bench_function("solar_term_instant", |b| {
        b.iter(|| solar_term_instant(black_box(2024), black_box(SolarTerm::StartOfSpring)))
    });
    group.sample_size(20);
    group.bench_function("generate_decade", |b| {
        b.iter(|| {
            SolarTermTable::generate(black_box(TableRange::new(2020, 2029)))
                .expect("range should be valid")
        })
    });
    group.bench_function("lunar_date", |b| {
        let date = CivilDate::new(2023, 3, 22).expect("valid date");
        b.iter(|| LunarDate::from_civil(black_box(date)).expect("lunar date should resolve"))
    });
    group.finish();
}

criterion_group!(benches, chart_bench, solar_bench);
criterion_main!(benches);
