// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test code readability over pedantic
#![allow(clippy::cast_possible_truncation)] // Test data generation

//! One mapper shared by many threads.

use morph::{Mappable, Mapper, MappingOptions, PropertyOverride, TypeMap};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, PartialEq, Mappable)]
struct Reading {
    sensor_id: u32,
    celsius: f64,
}

#[derive(Debug, Clone, PartialEq, Mappable)]
struct Fault {
    sensor_id: u32,
    code: u16,
}

#[derive(Debug, Clone, PartialEq, Mappable)]
struct Offline;

#[derive(Debug, Clone, PartialEq, Mappable)]
enum Event {
    Reading(Reading),
    Fault(Fault),
    Offline(Offline),
}

#[derive(Debug, Clone, PartialEq, Mappable)]
struct ReadingDto {
    sensor_id: u32,
    fahrenheit: f64,
}

#[derive(Debug, Clone, PartialEq, Mappable)]
struct FaultDto {
    sensor_id: u32,
    code: u16,
    #[morph(default)]
    acknowledged: bool,
}

#[derive(Debug, Clone, PartialEq, Mappable)]
enum EventDto {
    Reading(ReadingDto),
    Fault(FaultDto),
    Offline(Offline),
}

const THREADS: usize = 8;
const EVENTS_PER_THREAD: usize = 200;

fn mapper() -> Mapper {
    Mapper::builder()
        .type_map(TypeMap::new::<Reading, ReadingDto>().with_override(
            PropertyOverride::typed("celsius", "fahrenheit", |c: f64| c * 9.0 / 5.0 + 32.0),
        ))
        .options(MappingOptions::new().dynamic_type_mapping(true))
        .build()
        .expect("mapper")
}

fn events(seed: u64) -> Vec<Event> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..EVENTS_PER_THREAD)
        .map(|_| match rng.u8(0..3) {
            0 => Event::Reading(Reading {
                sensor_id: rng.u32(0..64),
                celsius: f64::from(rng.i16(-40..120)),
            }),
            1 => Event::Fault(Fault {
                sensor_id: rng.u32(0..64),
                code: rng.u16(..),
            }),
            _ => Event::Offline(Offline),
        })
        .collect()
}

#[test]
fn test_shared_mapper_gives_identical_results() {
    let mapper = Arc::new(mapper());

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let mapper = Arc::clone(&mapper);
            thread::spawn(move || {
                let input = events(i as u64);
                let output: Vec<EventDto> = mapper.map(&input).expect("map");
                (i, output)
            })
        })
        .collect();

    for handle in handles {
        let (i, output) = handle.join().expect("thread");
        let expected: Vec<EventDto> = mapper.map(&events(i as u64)).expect("map");
        assert_eq!(output, expected, "thread {} diverged", i);
        assert_eq!(output.len(), EVENTS_PER_THREAD);
    }
}

#[test]
fn test_mapped_values_follow_their_variant() {
    let input = events(42);
    let output: Vec<EventDto> = mapper().map(&input).expect("map");

    for (event, dto) in input.iter().zip(&output) {
        match (event, dto) {
            (Event::Reading(r), EventDto::Reading(d)) => {
                assert_eq!(r.sensor_id, d.sensor_id);
                assert!((d.fahrenheit - (r.celsius * 1.8 + 32.0)).abs() < 1e-9);
            }
            (Event::Fault(f), EventDto::Fault(d)) => {
                assert_eq!((f.sensor_id, f.code), (d.sensor_id, d.code));
                assert!(!d.acknowledged);
            }
            (Event::Offline(_), EventDto::Offline(_)) => {}
            other => panic!("variant changed: {:?}", other),
        }
    }
}
