use std::fmt;

use crate::iupac;

/// A recognition site matched position by position against a sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    site: String,
}

impl Site {
    pub fn compile(site: &str) -> Site {
        Site {
            site: site.to_ascii_uppercase(),
        }
    }

    pub fn len(&self) -> usize {
        self.site.len()
    }

    pub fn is_empty(&self) -> bool {
        self.site.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.site
    }

    /// Returns true if the site matches the start of `window`.
    pub fn matches(&self, window: &[u8]) -> bool {
        self.len() <= window.len()
            && self
                .site
                .bytes()
                .zip(window.iter())
                .all(|(query, &candidate)| iupac::matches(query, candidate))
    }

    /// Start offsets of every match in `sequence`, left to right. Each start index is
    /// tested once, so overlapping matches beginning at different offsets are all reported.
    pub fn positions<'a>(&'a self, sequence: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
        // windows() panics on a zero width; an empty site never matches
        let width = usize::max(1, self.len());

        sequence
            .windows(width)
            .enumerate()
            .filter(move |(_, window)| !self.is_empty() && self.matches(window))
            .map(|(idx, _)| idx)
    }

    pub fn reverse_complement(&self) -> Site {
        Site::compile(&iupac::reverse_complement(&self.site))
    }

    pub fn is_palindromic(&self) -> bool {
        iupac::is_palindromic(&self.site)
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.site)
    }
}
