extern crate restrictr;

use bio_types::strand::Strand;

use restrictr::database::{get_enzyme, Database};
use restrictr::enzyme::{Enzyme, Overhang};
use restrictr::locate::*;

fn enzyme(name: &str) -> &'static Enzyme {
    get_enzyme(name).unwrap()
}

fn custom(site: &str, forward_cut: isize, reverse_cut: isize) -> Enzyme {
    Enzyme {
        name: format!("Test{}", site),
        site: site.into(),
        forward_cut,
        reverse_cut,
        overhang_length: 0,
        overhang: Overhang::Blunt,
        suppliers: Vec::new(),
    }
}

fn positions(sites: &[CutSite]) -> Vec<usize> {
    sites.iter().map(|site| site.position).collect()
}

/// Replaces ambiguity codes with one of the bases they represent
fn concrete(site: &str) -> String {
    site.chars()
        .map(|symbol| match symbol {
            'R' | 'W' | 'M' | 'D' | 'H' | 'V' | 'N' => 'A',
            'Y' | 'B' => 'C',
            'S' | 'K' => 'G',
            other => other,
        })
        .collect()
}

#[test]
fn test_ecori_two_sites() {
    let sites = find_cut_sites(b"ATGCGAATTCATGCGAATTCATGC", enzyme("EcoRI"));

    assert_eq!(positions(&sites), vec![4, 14]);
    assert_eq!(sites[0].forward_cut, 5);
    assert_eq!(sites[0].reverse_cut, 9);
    assert_eq!(sites[1].forward_cut, 15);
    assert_eq!(sites[1].reverse_cut, 19);
    assert!(sites.iter().all(|site| site.strand == Strand::Forward));
    assert!(sites.iter().all(|site| site.enzyme.name == "EcoRI"));
}

#[test]
fn test_ecori_no_sites() {
    assert!(find_cut_sites(b"ATGCATGCATGC", enzyme("EcoRI")).is_empty());
}

#[test]
fn test_empty_and_short_sequences() {
    assert!(find_cut_sites(b"", enzyme("EcoRI")).is_empty());
    assert!(find_cut_sites(b"GAATT", enzyme("EcoRI")).is_empty());
    assert!(find_cut_sites(b"", enzyme("BsaI")).is_empty());
    assert!(find_all_cut_sites(b"", None).is_empty());
}

#[test]
fn test_empty_site() {
    assert!(find_cut_sites(b"ACGT", &custom("", 0, 0)).is_empty());
}

#[test]
fn test_matching_ignores_case() {
    let sites = find_cut_sites(b"atgcgaattcatgc", enzyme("EcoRI"));

    assert_eq!(positions(&sites), vec![4]);
}

#[test]
fn test_palindromic_site_reported_once() {
    let hindiii = enzyme("HindIII");
    assert!(hindiii.is_palindromic());

    let sites = find_cut_sites(b"CCAAGCTTCC", hindiii);

    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].position, 2);
    assert_eq!(sites[0].forward_cut, 3);
    assert_eq!(sites[0].reverse_cut, 7);
}

#[test]
fn test_non_palindromic_site_on_both_strands() {
    let bsai = enzyme("BsaI");
    let sites = find_cut_sites(b"AAGGTCTCAAAAGAGACCAA", bsai);

    assert_eq!(positions(&sites), vec![2, 12]);

    assert_eq!(sites[0].strand, Strand::Forward);
    assert_eq!(sites[0].forward_cut, 2 + 7);
    assert_eq!(sites[0].reverse_cut, 2 + 6 + 5);

    assert_eq!(sites[1].strand, Strand::Reverse);
    assert_eq!(sites[1].forward_cut, 12 + 6 - 5);
    assert_eq!(sites[1].reverse_cut, 12 - 7);
}

#[test]
fn test_cuts_outside_of_sequence_are_not_clamped() {
    let bsai = enzyme("BsaI");

    let sites = find_cut_sites(b"GGTCTC", bsai);
    assert_eq!(positions(&sites), vec![0]);
    assert_eq!(sites[0].forward_cut, 7);
    assert_eq!(sites[0].reverse_cut, 11);

    let sites = find_cut_sites(b"GAGACC", bsai);
    assert_eq!(positions(&sites), vec![0]);
    assert_eq!(sites[0].forward_cut, 1);
    assert_eq!(sites[0].reverse_cut, -7);
}

#[test]
fn test_ambiguous_site() {
    let hinfi = enzyme("HinfI");
    let sites = find_cut_sites(b"GAATCCGACTCCGAGTCCGATTC", hinfi);

    assert_eq!(positions(&sites), vec![0, 6, 12, 18]);
}

#[test]
fn test_ambiguous_symbols_in_sequence_do_not_match() {
    assert!(find_cut_sites(b"GANTC", enzyme("HinfI")).is_empty());
    assert!(find_cut_sites(b"GAANTC", enzyme("EcoRI")).is_empty());
}

#[test]
fn test_overlapping_sites_are_all_reported() {
    let enz = custom("ANA", 1, -1);
    let sites = find_cut_sites(b"AAAAA", &enz);

    assert_eq!(positions(&sites), vec![0, 1, 2]);
}

#[test]
fn test_forward_hits_precede_reverse_hits_at_same_position() {
    // Both AN and its reverse complement NT match at position 0
    let enzyme = custom("AN", 1, 0);
    let sites = find_cut_sites(b"AT", &enzyme);

    assert_eq!(positions(&sites), vec![0, 0]);
    assert_eq!(sites[0].strand, Strand::Forward);
    assert_eq!(sites[0].forward_cut, 1);
    assert_eq!(sites[0].reverse_cut, 2);
    assert_eq!(sites[1].strand, Strand::Reverse);
    assert_eq!(sites[1].forward_cut, 2);
    assert_eq!(sites[1].reverse_cut, -1);
}

#[test]
fn test_single_occurrence_for_every_enzyme() {
    let flank = "A".repeat(12);

    for enzyme in Database::builtin() {
        let sequence = format!("{}{}{}", flank, concrete(&enzyme.site), flank);
        let sites = find_cut_sites(sequence.as_bytes(), enzyme);

        assert_eq!(positions(&sites), vec![flank.len()], "{}", enzyme.name);
        assert_eq!(sites[0].strand, Strand::Forward, "{}", enzyme.name);
    }
}

#[test]
fn test_positions_are_within_bounds() {
    let sequence = b"GGTCTCGAATTCGAGACCAAGCTTGCGGCCGCTTTAAAGATATCGGATCCGACTC";

    for site in find_all_cut_sites(sequence, None) {
        assert!(site.position + site.enzyme.site.len() <= sequence.len());
    }
}

#[test]
fn test_find_all_cut_sites_is_sorted() {
    let enzymes = vec![enzyme("HindIII").clone(), enzyme("EcoRI").clone()];
    let sites = find_all_cut_sites(b"GAATTCAAAAGCTTAGAATTC", Some(&enzymes[..]));

    assert_eq!(positions(&sites), vec![0, 8, 15]);
    let names: Vec<&str> = sites.iter().map(|site| site.enzyme.name.as_str()).collect();
    assert_eq!(names, vec!["EcoRI", "HindIII", "EcoRI"]);
}

#[test]
fn test_find_all_cut_sites_ties_follow_enzyme_order() {
    // EcoRI and GNNNNC both match at position 1
    let first = custom("GNNNNC", 0, 0);
    let enzymes = vec![enzyme("EcoRI").clone(), first.clone()];

    let sites = find_all_cut_sites(b"TGAATTC", Some(&enzymes[..]));
    let names: Vec<&str> = sites.iter().map(|site| site.enzyme.name.as_str()).collect();
    assert_eq!(names, vec!["EcoRI", "TestGNNNNC"]);

    let enzymes = vec![first, enzyme("EcoRI").clone()];
    let sites = find_all_cut_sites(b"TGAATTC", Some(&enzymes[..]));
    let names: Vec<&str> = sites.iter().map(|site| site.enzyme.name.as_str()).collect();
    assert_eq!(names, vec!["TestGNNNNC", "EcoRI"]);
}

#[test]
fn test_find_all_cut_sites_defaults_to_builtin() {
    let sequence = b"ATGCGAATTCATGC";
    let sites = find_all_cut_sites(sequence, None);

    assert!(sites
        .iter()
        .any(|site| site.enzyme.name == "EcoRI" && site.position == 4));

    let expected: usize = Database::builtin()
        .iter()
        .map(|enzyme| find_cut_sites(sequence, enzyme).len())
        .sum();
    assert_eq!(sites.len(), expected);
}

#[test]
fn test_find_cut_sites_for_enzyme_references() {
    let database = Database::builtin();
    let enzymes = database.by_overhang(Overhang::Blunt);

    let sites = find_cut_sites_for(b"AAGATATCAACCCGGGAA", enzymes);
    let names: Vec<&str> = sites.iter().map(|site| site.enzyme.name.as_str()).collect();

    assert_eq!(names, vec!["EcoRV", "SmaI"]);
}
