use chrono::{Datelike, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weather_records::{aggregate, prepare, RawRecord, RecordIndex, SelectionWindow, WeatherTable};

/// Two centuries of synthetic daily data, roughly the size of the Radcliffe series.
fn synthetic_table() -> WeatherTable {
    let start = NaiveDate::from_ymd_opt(1815, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
    let records = start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|d| {
            let seasonal = f64::from(d.ordinal()) / 366.0 * 20.0;
            let noise = ((i64::from(d.num_days_from_ce()) * 7919) % 97) as f64 / 10.0;
            // Every 50th day is missing a maximum, as in the real series.
            let tmax = (d.num_days_from_ce() % 50 != 0).then_some(seasonal + noise);
            RawRecord::empty(d.year(), d.month(), d.day())
                .with_temperatures(tmax, Some(seasonal - noise))
        })
        .collect();
    WeatherTable::new(records)
}

fn bench_record_book(c: &mut Criterion) {
    let table = synthetic_table();
    let one_year = SelectionWindow::single_year(2019);
    let decade = SelectionWindow::new(2011, 10).unwrap();

    c.bench_function("record_index_build", |b| {
        b.iter(|| RecordIndex::build(black_box(table.records())))
    });
    c.bench_function("aggregate_one_year", |b| {
        b.iter(|| aggregate(black_box(&table), black_box(one_year)))
    });
    c.bench_function("aggregate_decade", |b| {
        b.iter(|| aggregate(black_box(&table), black_box(decade)))
    });
    c.bench_function("prepare_decade", |b| {
        b.iter(|| prepare(black_box(&table), black_box(decade)))
    });
}

criterion_group!(benches, bench_record_book);
criterion_main!(benches);
