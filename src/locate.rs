use bio_types::strand::Strand;

use crate::database::Database;
use crate::enzyme::Enzyme;

/// Cut positions are not clamped to the sequence
#[derive(Clone, Debug, PartialEq)]
pub struct CutSite<'a> {
    pub enzyme: &'a Enzyme,
    pub position: usize,
    pub forward_cut: isize,
    pub reverse_cut: isize,
    pub strand: Strand,
}

pub fn find_cut_sites<'a>(sequence: &[u8], enzyme: &'a Enzyme) -> Vec<CutSite<'a>> {
    let site = enzyme.compile();
    let size = site.len() as isize;

    let mut sites: Vec<CutSite> = site
        .positions(sequence)
        .map(|idx| {
            let pos = idx as isize;

            CutSite {
                enzyme,
                position: idx,
                forward_cut: pos + enzyme.forward_cut,
                reverse_cut: pos + size + enzyme.reverse_cut,
                strand: Strand::Forward,
            }
        })
        .collect();

    // Hits for a palindromic site already account for both strands
    if !site.is_palindromic() {
        let revcomp = site.reverse_complement();

        sites.extend(revcomp.positions(sequence).map(|idx| {
            let pos = idx as isize;

            CutSite {
                enzyme,
                position: idx,
                forward_cut: pos + size - enzyme.reverse_cut,
                reverse_cut: pos - enzyme.forward_cut,
                strand: Strand::Reverse,
            }
        }));
    }

    // Stable sort, keeping forward hits ahead of reverse hits
    sites.sort_by_key(|site| site.position);
    sites
}

/// Defaults to the built-in enzymes
pub fn find_all_cut_sites<'a>(
    sequence: &[u8],
    enzymes: Option<&'a [Enzyme]>,
) -> Vec<CutSite<'a>> {
    let enzymes = enzymes.unwrap_or_else(|| Database::builtin().enzymes());

    find_cut_sites_for(sequence, enzymes)
}

pub fn find_cut_sites_for<'a, I>(sequence: &[u8], enzymes: I) -> Vec<CutSite<'a>>
where
    I: IntoIterator<Item = &'a Enzyme>,
{
    let mut sites: Vec<CutSite> = enzymes
        .into_iter()
        .flat_map(|enzyme| find_cut_sites(sequence, enzyme))
        .collect();

    sites.sort_by_key(|site| site.position);
    sites
}
