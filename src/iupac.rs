use bio::alphabets::dna;

pub const A: u8 = 0b0001;
pub const C: u8 = 0b0010;
pub const G: u8 = 0b0100;
pub const T: u8 = 0b1000;

const MAPPING: [(u8, &[u8]); 15] = [
    (b'A', b"A"),
    (b'C', b"C"),
    (b'G', b"G"),
    (b'T', b"T"),
    (b'R', b"AG"),
    (b'Y', b"CT"),
    (b'S', b"GC"),
    (b'W', b"AT"),
    (b'K', b"GT"),
    (b'M', b"AC"),
    (b'B', b"CGT"),
    (b'D', b"AGT"),
    (b'H', b"ACT"),
    (b'V', b"ACG"),
    (b'N', b"ACGT"),
];

lazy_static! {
    static ref BASES: [u8; 256] = {
        let mut table = [0; 256];

        for (symbol, bases) in &MAPPING {
            let mask = bases.iter().fold(0, |mask, &base| mask | nucleotide(base));

            table[*symbol as usize] = mask;
            table[symbol.to_ascii_lowercase() as usize] = mask;
        }

        table
    };
}

/// Bit for a concrete nucleotide (A, C, G, or T in either case); 0 for anything else,
/// including ambiguity codes.
pub fn nucleotide(candidate: u8) -> u8 {
    match candidate {
        b'a' | b'A' => A,
        b'c' | b'C' => C,
        b'g' | b'G' => G,
        b't' | b'T' => T,
        _ => 0,
    }
}

/// Set of nucleotides represented by an IUPAC symbol, as a bit mask of [A], [C], [G], and
/// [T]. Characters outside the IUPAC alphabet yield 0.
pub fn bases(symbol: u8) -> u8 {
    BASES[symbol as usize]
}

pub fn is_iupac(symbol: u8) -> bool {
    bases(symbol) != 0
}

/// Returns true if the concrete `candidate` nucleotide is one of the bases represented by
/// `query`. Non-IUPAC queries only match themselves, ignoring case.
pub fn matches(query: u8, candidate: u8) -> bool {
    match bases(query) {
        0 => query.eq_ignore_ascii_case(&candidate),
        mask => mask & nucleotide(candidate) != 0,
    }
}

pub fn complement(symbol: u8) -> u8 {
    dna::complement(symbol)
}

/// Reverse complement of an IUPAC sequence; ambiguity codes are complemented as sets and
/// unknown characters are passed through unchanged.
pub fn reverse_complement(site: &str) -> String {
    site.chars()
        .rev()
        .map(|symbol| {
            if symbol.is_ascii() {
                complement(symbol as u8) as char
            } else {
                symbol
            }
        })
        .collect()
}

/// A site is palindromic if it reads the same as its own reverse complement.
pub fn is_palindromic(site: &str) -> bool {
    let site = site.to_ascii_uppercase();

    reverse_complement(&site) == site
}
