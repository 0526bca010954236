//! Listing pipeline benchmark: filter then paginate.
//!
//! ```bash
//! cargo bench --package johnjud-service
//! ```

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use johnjud_core::{paginate, Gender, Pet};
use johnjud_service::{filter_pets, PetFilter};

fn catalogue(size: usize) -> Vec<Pet> {
    (0..size)
        .map(|i| Pet {
            name: format!("pet-{i}"),
            pet_type: if i % 2 == 0 { "dog" } else { "cat" }.to_string(),
            gender: if i % 3 == 0 { Gender::Female } else { Gender::Male },
            color: if i % 5 == 0 { "white" } else { "black" }.to_string(),
            birthdate: format!("20{:02}-01-01T00:00:00Z", 10 + i % 14),
            ..Pet::default()
        })
        .collect()
}

fn bench_listing(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let filter = PetFilter {
        min_age: 1,
        max_age: 8,
        pet_type: "dog".to_string(),
        search: "pet-1".to_string(),
        ..PetFilter::default()
    };

    let mut group = c.benchmark_group("listing");
    for size in [100, 1_000, 10_000] {
        let pets = catalogue(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("filter", size), &pets, |b, pets| {
            b.iter(|| filter_pets(black_box(pets.clone()), &filter, now).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("filter_and_page", size), &pets, |b, pets| {
            b.iter(|| {
                let kept = filter_pets(black_box(pets.clone()), &filter, now).unwrap();
                paginate(kept, 2, 20)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_listing);
criterion_main!(benches);
