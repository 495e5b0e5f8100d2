extern crate restrictr;

use restrictr::database::Database;
use restrictr::enzyme::{are_ends_compatible, Enzyme, Overhang};

fn enzyme(name: &str) -> &'static Enzyme {
    Enzyme::get(name).unwrap()
}

#[test]
fn test_enzyme_ecori() {
    assert_eq!(Enzyme::get("ecori").map(|v| v.name.as_str()), Some("EcoRI"));
    assert_eq!(Enzyme::get("EcoRI").map(|v| v.name.as_str()), Some("EcoRI"));
    assert_eq!(Enzyme::get("eCoRi").map(|v| v.name.as_str()), Some("EcoRI"));
    assert_eq!(Enzyme::get("ECORI").map(|v| v.name.as_str()), Some("EcoRI"));
}

#[test]
fn test_enzyme_ecori_record() {
    let ecori = enzyme("EcoRI");

    assert_eq!(ecori.site, "GAATTC");
    assert_eq!(ecori.forward_cut, 1);
    assert_eq!(ecori.reverse_cut, -1);
    assert_eq!(ecori.overhang, Overhang::FivePrime);
    assert_eq!(ecori.overhang_length, 4);
    assert!(ecori.has_supplier("N"));
    assert!(!ecori.has_supplier("n"));
    assert!(ecori.is_palindromic());
}

#[test]
fn test_enzyme_unknown() {
    assert_eq!(Enzyme::get("EcoRII"), None);
    assert_eq!(Enzyme::get("EcoR"), None);
    assert_eq!(Enzyme::get(""), None);
    assert_eq!(Enzyme::get("Foo"), None);
}

#[test]
fn test_overhang_from_str() {
    assert_eq!("5'".parse::<Overhang>().unwrap(), Overhang::FivePrime);
    assert_eq!("5".parse::<Overhang>().unwrap(), Overhang::FivePrime);
    assert_eq!("3'".parse::<Overhang>().unwrap(), Overhang::ThreePrime);
    assert_eq!("Blunt".parse::<Overhang>().unwrap(), Overhang::Blunt);
    assert!("sticky".parse::<Overhang>().is_err());
    assert!("".parse::<Overhang>().is_err());
}

#[test]
fn test_overhang_to_string() {
    assert_eq!(Overhang::FivePrime.to_string(), "5'");
    assert_eq!(Overhang::ThreePrime.to_string(), "3'");
    assert_eq!(Overhang::Blunt.to_string(), "blunt");
}

#[test]
fn test_every_enzyme_is_compatible_with_itself() {
    for enzyme in Database::builtin() {
        assert!(are_ends_compatible(enzyme, enzyme), "{}", enzyme.name);
    }
}

#[test]
fn test_blunt_enzymes_are_compatible() {
    let blunt = Database::builtin().by_overhang(Overhang::Blunt);
    assert!(blunt.len() > 1);

    for a in &blunt {
        for b in &blunt {
            assert!(are_ends_compatible(a, b), "{} vs {}", a.name, b.name);
        }
    }

    assert!(enzyme("EcoRV").is_compatible_with(enzyme("SmaI")));
    assert!(enzyme("MlyI").is_compatible_with(enzyme("HaeIII")));
}

#[test]
fn test_different_overhang_types_are_incompatible() {
    let database = Database::builtin();

    for a in database {
        for b in database {
            if a.overhang != b.overhang {
                assert!(!are_ends_compatible(a, b), "{} vs {}", a.name, b.name);
            }
        }
    }

    // 5' and 3' overhangs of the same length
    assert!(!are_ends_compatible(enzyme("EcoRI"), enzyme("PstI")));
    assert!(!are_ends_compatible(enzyme("EcoRI"), enzyme("EcoRV")));
}

#[test]
fn test_same_overhang_type_with_different_lengths_are_incompatible() {
    // 4 nt vs 2 nt 5' overhangs
    assert!(!are_ends_compatible(enzyme("EcoRI"), enzyme("NdeI")));
    // 4 nt vs 3 nt 3' overhangs
    assert!(!are_ends_compatible(enzyme("PstI"), enzyme("BglI")));
}

#[test]
fn test_sticky_ends_compare_geometry_only() {
    // Both leave 4 nt 5' overhangs, but with different sequences
    assert!(are_ends_compatible(enzyme("EcoRI"), enzyme("HindIII")));
    assert!(are_ends_compatible(enzyme("BamHI"), enzyme("BglII")));
    assert!(are_ends_compatible(enzyme("PstI"), enzyme("KpnI")));
}

#[test]
fn test_enzyme_json() {
    let json = r#"{
        "name": "BsaI",
        "site": "GGTCTC",
        "forwardCut": 7,
        "reverseCut": 5,
        "overhangLength": 4,
        "overhangType": "5'",
        "suppliers": ["N"]
    }"#;

    let parsed: Enzyme = serde_json::from_str(json).unwrap();

    assert_eq!(&parsed, enzyme("BsaI"));
}
