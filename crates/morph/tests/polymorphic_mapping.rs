// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test code readability over pedantic
#![allow(clippy::too_many_lines)] // Test scenarios
#![allow(clippy::missing_panics_doc)] // Tests panic on failure

//! Mapping between two hierarchies built on abstract types.
//!
//! `Source` and `Target` are closed variant sets that share the `Unknown`
//! singleton. Resolution is exercised through explicit type maps, dynamic
//! (structural) matching and identity passthrough.

use morph::{Mappable, Mapper, MappingError, MappingOptions, PropertyOverride, TypeMap};

#[derive(Debug, Clone, PartialEq, Mappable)]
struct Unknown;

#[derive(Debug, Clone, PartialEq, Mappable)]
struct SourceImplA {
    id: u32,
    label: String,
}

#[derive(Debug, Clone, PartialEq, Mappable)]
struct SourceImplB {
    id: u32,
    name: String,
}

#[derive(Debug, Clone, PartialEq, Mappable)]
struct SourceImplC {
    serial: u64,
}

#[derive(Debug, Clone, PartialEq, Mappable)]
struct SourceImplD {
    id: u32,
    name: String,
    label: String,
}

#[derive(Debug, Clone, PartialEq, Mappable)]
enum Source {
    A(SourceImplA),
    B(SourceImplB),
    C(SourceImplC),
    D(SourceImplD),
    Unknown(Unknown),
}

#[derive(Debug, Clone, PartialEq, Mappable)]
struct TargetImplA {
    id: u32,
    name: String,
}

#[derive(Debug, Clone, PartialEq, Mappable)]
struct TargetImplB {
    id: u32,
    label: String,
}

#[derive(Debug, Clone, PartialEq, Mappable)]
enum Target {
    A(TargetImplA),
    B(TargetImplB),
    Unknown(Unknown),
}

impl Default for Target {
    fn default() -> Self {
        Target::Unknown(Unknown)
    }
}

#[derive(Debug, Clone, PartialEq, Mappable)]
struct SourceHolder {
    item: Source,
    note: String,
}

#[derive(Debug, Clone, PartialEq, Mappable)]
struct OptionalHolder {
    item: Option<Target>,
    note: String,
}

#[derive(Debug, Clone, PartialEq, Mappable)]
struct DefaultedHolder {
    #[morph(default)]
    item: Target,
    note: String,
}

#[derive(Debug, Clone, PartialEq, Mappable)]
struct RequiredHolder {
    item: Target,
    note: String,
}

#[derive(Debug, Clone, PartialEq, Mappable)]
struct SourceCatalog {
    items: Vec<Source>,
}

#[derive(Debug, Clone, PartialEq, Mappable)]
struct TargetCatalog {
    items: Vec<Target>,
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn don_pablo() -> SourceImplB {
    SourceImplB {
        id: 1234,
        name: "don pablo".into(),
    }
}

fn dynamic_mapper() -> Mapper {
    Mapper::new(
        Vec::new(),
        MappingOptions::new().dynamic_type_mapping(true),
    )
    .expect("mapper")
}

#[test]
fn test_explicit_type_map_to_abstract_target() {
    init_logging();
    let mapper = Mapper::builder()
        .type_map(TypeMap::new::<SourceImplB, TargetImplA>())
        .build()
        .expect("mapper");

    let expected = Target::A(TargetImplA {
        id: 1234,
        name: "don pablo".into(),
    });

    // Declared as the abstract source and as the concrete variant.
    let from_abstract: Target = mapper.map(&Source::B(don_pablo())).expect("map");
    assert_eq!(from_abstract, expected);

    let from_concrete: Target = mapper.map(&don_pablo()).expect("map");
    assert_eq!(from_concrete, expected);
}

#[test]
fn test_explicit_precedence_over_dynamic() {
    init_logging();
    // SourceImplB structurally matches TargetImplA, but the explicit map wins.
    let mapper = Mapper::builder()
        .type_map(
            TypeMap::new::<SourceImplB, TargetImplB>()
                .with_override(PropertyOverride::rename("name", "label")),
        )
        .options(MappingOptions::new().dynamic_type_mapping(true))
        .build()
        .expect("mapper");

    let target: Target = mapper.map(&Source::B(don_pablo())).expect("map");
    assert_eq!(
        target,
        Target::B(TargetImplB {
            id: 1234,
            label: "don pablo".into(),
        })
    );

    let dynamic: Target = dynamic_mapper()
        .map(&Source::B(don_pablo()))
        .expect("map");
    assert!(matches!(dynamic, Target::A(_)));
}

#[test]
fn test_heterogeneous_collection_elements_resolve_independently() {
    init_logging();
    let catalog = SourceCatalog {
        items: vec![
            Source::A(SourceImplA {
                id: 1,
                label: "first".into(),
            }),
            Source::B(SourceImplB {
                id: 2,
                name: "second".into(),
            }),
            Source::Unknown(Unknown),
            Source::B(SourceImplB {
                id: 3,
                name: "third".into(),
            }),
        ],
    };

    let mapped: TargetCatalog = dynamic_mapper().map(&catalog).expect("map");
    assert_eq!(
        mapped.items,
        vec![
            Target::B(TargetImplB {
                id: 1,
                label: "first".into(),
            }),
            Target::A(TargetImplA {
                id: 2,
                name: "second".into(),
            }),
            Target::Unknown(Unknown),
            Target::A(TargetImplA {
                id: 3,
                name: "third".into(),
            }),
        ]
    );
}

#[test]
fn test_dynamic_singleton_is_reused() {
    init_logging();
    let mapper = dynamic_mapper();

    let target: Target = mapper.map(&Source::Unknown(Unknown)).expect("map");
    assert_eq!(target, Target::Unknown(Unknown));

    let holder = SourceHolder {
        item: Source::Unknown(Unknown),
        note: "n".into(),
    };
    let mapped: RequiredHolder = mapper.map(&holder).expect("map");
    assert_eq!(mapped.item, Target::Unknown(Unknown));
}

#[test]
fn test_singleton_needs_a_resolution_rule() {
    // Neither dynamic nor identity: a shared singleton is not mapped implicitly.
    let mapper = Mapper::new(Vec::new(), MappingOptions::default()).expect("mapper");
    let err = mapper
        .map::<Target, _>(&Source::Unknown(Unknown))
        .unwrap_err();
    assert!(err.is_unresolvable());

    // Identity applies because the singleton is itself a Target variant.
    let identity = Mapper::new(
        Vec::new(),
        MappingOptions::new().identity_type_mapping(true),
    )
    .expect("mapper");
    let target: Target = identity.map(&Source::Unknown(Unknown)).expect("map");
    assert_eq!(target, Target::Unknown(Unknown));
}

#[test]
fn test_optional_and_defaulted_fields_are_omitted() {
    init_logging();
    let holder = SourceHolder {
        item: Source::C(SourceImplC { serial: 99 }),
        note: "kept".into(),
    };
    let mapper = dynamic_mapper();

    let optional: OptionalHolder = mapper.map(&holder).expect("map");
    assert_eq!(
        optional,
        OptionalHolder {
            item: None,
            note: "kept".into(),
        }
    );

    let defaulted: DefaultedHolder = mapper.map(&holder).expect("map");
    assert_eq!(defaulted.item, Target::Unknown(Unknown));
    assert_eq!(defaulted.note, "kept");

    // Resolvable values still map into the optional field.
    let resolvable = SourceHolder {
        item: Source::B(don_pablo()),
        note: "kept".into(),
    };
    let optional: OptionalHolder = mapper.map(&resolvable).expect("map");
    assert!(matches!(optional.item, Some(Target::A(_))));
}

#[test]
fn test_required_abstract_field_fails() {
    init_logging();
    let holder = SourceHolder {
        item: Source::C(SourceImplC { serial: 99 }),
        note: "lost".into(),
    };
    let err = dynamic_mapper()
        .map::<RequiredHolder, _>(&holder)
        .unwrap_err();

    match err {
        MappingError::UnresolvableAbstractType {
            path,
            source_type,
            target_type,
        } => {
            assert!(path.ends_with("SourceHolder.item"), "path: {}", path);
            assert!(source_type.ends_with("SourceImplC"));
            assert!(target_type.ends_with("Target"));
        }
        other => panic!("unexpected error: {}", other),
    }

    // The same source at top level fails as well.
    let err = dynamic_mapper()
        .map::<Target, _>(&Source::C(SourceImplC { serial: 1 }))
        .unwrap_err();
    assert!(err.is_unresolvable());
}

#[derive(Debug, Clone, PartialEq, Mappable)]
struct Card {
    id: u32,
    number: String,
}

#[derive(Debug, Clone, PartialEq, Mappable)]
enum Wallet {
    Card(Card),
}

#[derive(Debug, Clone, PartialEq, Mappable)]
struct CardDto {
    id: u32,
    #[morph(default)]
    number: u64,
}

#[derive(Debug, Clone, PartialEq, Mappable)]
enum WalletDto {
    Card(CardDto),
}

#[test]
fn test_defaulted_field_of_another_type_takes_its_default() {
    init_logging();
    let wallet = Wallet::Card(Card {
        id: 1,
        number: "4242".into(),
    });

    let dto: WalletDto = dynamic_mapper().map(&wallet).expect("map");
    assert_eq!(dto, WalletDto::Card(CardDto { id: 1, number: 0 }));
}

#[test]
fn test_dynamic_ambiguity_fails() {
    let source = Source::D(SourceImplD {
        id: 5,
        name: "n".into(),
        label: "l".into(),
    });
    let err = dynamic_mapper().map::<Target, _>(&source).unwrap_err();

    match err {
        MappingError::AmbiguousDynamicMapping { candidates, .. } => {
            assert_eq!(candidates.len(), 2);
            assert!(candidates[0].ends_with("TargetImplA"));
            assert!(candidates[1].ends_with("TargetImplB"));
        }
        other => panic!("unexpected error: {}", other),
    }

    // Ambiguity in an optional field is not softened.
    let holder = SourceHolder {
        item: source,
        note: String::new(),
    };
    let err = dynamic_mapper()
        .map::<OptionalHolder, _>(&holder)
        .unwrap_err();
    assert!(matches!(err, MappingError::AmbiguousDynamicMapping { .. }));
}

#[test]
fn test_type_maps_to_several_variants_are_ambiguous() {
    let mapper = Mapper::builder()
        .type_map(TypeMap::new::<SourceImplB, TargetImplA>())
        .type_map(
            TypeMap::new::<SourceImplB, TargetImplB>()
                .with_override(PropertyOverride::rename("name", "label")),
        )
        .build()
        .expect("distinct pairs are valid");

    let err = mapper.map::<Target, _>(&don_pablo()).unwrap_err();
    assert!(matches!(err, MappingError::AmbiguousTypeMap { .. }));

    // A concrete target picks its own pair.
    let b: TargetImplB = mapper.map(&don_pablo()).expect("map");
    assert_eq!(b.label, "don pablo");
}

#[test]
fn test_identity_law() {
    let mapper = Mapper::new(
        Vec::new(),
        MappingOptions::new().identity_type_mapping(true),
    )
    .expect("mapper");

    let values = vec![
        Source::A(SourceImplA {
            id: 1,
            label: "a".into(),
        }),
        Source::B(don_pablo()),
        Source::C(SourceImplC { serial: 7 }),
        Source::Unknown(Unknown),
    ];
    for value in &values {
        let same: Source = mapper.map(value).expect("map");
        assert_eq!(&same, value);
    }

    let catalog = SourceCatalog { items: values };
    let same: SourceCatalog = mapper.map(&catalog).expect("map");
    assert_eq!(same, catalog);

    let holder = SourceHolder {
        item: Source::C(SourceImplC { serial: 3 }),
        note: "identity".into(),
    };
    let same: SourceHolder = mapper.map(&holder).expect("map");
    assert_eq!(same, holder);
}

#[test]
fn test_identity_law_holds_with_dynamic_mapping() {
    init_logging();
    let both = MappingOptions::new()
        .dynamic_type_mapping(true)
        .identity_type_mapping(true);
    let mapper = Mapper::new(Vec::new(), both).expect("mapper");

    // SourceImplD structurally fits A, B and D.
    let d = Source::D(SourceImplD {
        id: 5,
        name: "don pablo".into(),
        label: "vip".into(),
    });
    let err = dynamic_mapper().map::<Source, _>(&d).unwrap_err();
    assert!(matches!(err, MappingError::AmbiguousDynamicMapping { .. }));

    let same: Source = mapper.map(&d).expect("map");
    assert_eq!(same, d);

    let catalog = SourceCatalog {
        items: vec![d, Source::B(don_pablo()), Source::Unknown(Unknown)],
    };
    let same: SourceCatalog = mapper.map(&catalog).expect("map");
    assert_eq!(same, catalog);

    // Other targets still resolve structurally.
    let target: Target = mapper.map(&Source::B(don_pablo())).expect("map");
    assert_eq!(
        target,
        Target::A(TargetImplA {
            id: 1234,
            name: "don pablo".into(),
        })
    );
}

#[test]
fn test_source_is_left_untouched() {
    let holder = SourceHolder {
        item: Source::B(don_pablo()),
        note: "n".into(),
    };
    let before = holder.clone();
    let _: OptionalHolder = dynamic_mapper().map(&holder).expect("map");
    assert_eq!(holder, before);
}
