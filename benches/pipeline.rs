use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bikeshare_stats::ingestion::load_trips_from_reader;
use bikeshare_stats::pipeline::normalize_demographics;
use bikeshare_stats::processing::filter_by_period;
use bikeshare_stats::report::Report;
use bikeshare_stats::selector::{City, DayFilter, MonthFilter, Selector};
use bikeshare_stats::types::DataSet;

const STATIONS: [&str; 5] = [
    "Canal St & Adams St",
    "Clinton St & Madison St",
    "Streeter Dr & Grand Ave",
    "Lake Shore Dr & Monroe St",
    "Michigan Ave & Oak St",
];

fn synthetic_csv(rows: usize) -> String {
    let base = NaiveDate::from_ymd_opt(2017, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let mut out = String::from(
        "Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n",
    );
    for i in 0..rows {
        let start = base + Duration::minutes((i as i64 * 37) % (181 * 24 * 60));
        let secs = 120 + (i as i64 * 53) % 3000;
        let end = start + Duration::seconds(secs);
        let user = if i % 3 == 0 { "Customer" } else { "Subscriber" };
        let gender = match i % 7 {
            0 => "",
            n if n % 2 == 0 => "Female",
            _ => "Male",
        };
        let year = if i % 11 == 0 {
            String::new()
        } else {
            format!("{}.0", 1950 + i % 50)
        };
        out.push_str(&format!(
            "{},{},{secs},{},{},{user},{gender},{year}\n",
            start.format("%Y-%m-%d %H:%M:%S"),
            end.format("%Y-%m-%d %H:%M:%S"),
            STATIONS[i % STATIONS.len()],
            STATIONS[(i * 3 + 1) % STATIONS.len()],
        ));
    }
    out
}

fn trips(rows: usize) -> DataSet {
    let csv = synthetic_csv(rows);
    normalize_demographics(load_trips_from_reader(csv.as_bytes()).unwrap())
}

fn bench_load(c: &mut Criterion) {
    let csv = synthetic_csv(50_000);
    c.bench_function("load_csv_50k", |b| {
        b.iter(|| load_trips_from_reader(black_box(csv.as_bytes())).unwrap())
    });
}

fn bench_filter(c: &mut Criterion) {
    let ds = trips(50_000);
    c.bench_function("filter_by_month_and_day_50k", |b| {
        b.iter(|| {
            filter_by_period(
                black_box(&ds),
                MonthFilter::Month(3),
                DayFilter::Day(chrono::Weekday::Mon),
            )
            .row_count()
        })
    });
}

fn bench_report(c: &mut Criterion) {
    let ds = trips(50_000);
    let sel = Selector::unfiltered(City::Chicago);
    c.bench_function("report_50k", |b| {
        b.iter(|| Report::from_dataset(sel, black_box(&ds)))
    });
}

criterion_group!(benches, bench_load, bench_filter, bench_report);
criterion_main!(benches);
