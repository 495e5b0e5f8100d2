//! Built-in enzyme table.
//!
//! Records follow the REBASE conventions used by the upstream generator: `forward_cut` is
//! the top-strand cut relative to the first base of the site, and `reverse_cut` is the
//! bottom-strand cut relative to the last base of the site. Suppliers are listed as one
//! REBASE code per character. Rows are sorted by name.
//!
//! This is a subset of the commercially available enzymes; complete tables written by the
//! generator are loaded with `Database::open`.

use crate::enzyme::Overhang::{self, Blunt, FivePrime, ThreePrime};

/// Name, site, forward cut, reverse cut, overhang length, overhang type, suppliers
pub type Record = (
    &'static str,
    &'static str,
    isize,
    isize,
    usize,
    Overhang,
    &'static str,
);

pub const ENZYMES: &[Record] = &[
    ("AatII", "GACGTC", 5, -5, 4, ThreePrime, "BEIKMNORV"),
    ("Acc65I", "GGTACC", 1, -1, 4, FivePrime, "BINV"),
    ("AccI", "GTMKAC", 2, -2, 2, FivePrime, "BJKMNORSX"),
    ("AcuI", "CTGAAG", 22, 14, 2, ThreePrime, "IN"),
    ("AfeI", "AGCGCT", 3, -3, 0, Blunt, "IN"),
    ("AflII", "CTTAAG", 1, -1, 4, FivePrime, "BJKNO"),
    ("AgeI", "ACCGGT", 1, -1, 4, FivePrime, "BJNR"),
    ("AluI", "AGCT", 2, -2, 0, Blunt, "BCIJKMNORSVXY"),
    ("AlwI", "GGATC", 9, 5, 1, FivePrime, "N"),
    ("ApaI", "GGGCCC", 5, -5, 4, ThreePrime, "BEJKMNRSVX"),
    ("ApaLI", "GTGCAC", 1, -1, 4, FivePrime, "CKNX"),
    ("AscI", "GGCGCGCC", 2, -2, 4, FivePrime, "BN"),
    ("AseI", "ATTAAT", 2, -2, 2, FivePrime, "JNO"),
    ("AvaI", "CYCGRG", 1, -1, 4, FivePrime, "BJMNORSVXY"),
    ("AvaII", "GGWCC", 1, -1, 3, FivePrime, "BJKMNRSX"),
    ("AvrII", "CCTAGG", 1, -1, 4, FivePrime, "N"),
    ("BamHI", "GGATCC", 1, -1, 4, FivePrime, "BCEIJKMNORSVXY"),
    ("BanII", "GRGCYC", 5, -5, 4, ThreePrime, "BJKNOSX"),
    ("BbsI", "GAAGAC", 8, 6, 4, FivePrime, "N"),
    ("BccI", "CCATC", 9, 5, 1, FivePrime, "N"),
    ("BceAI", "ACGGC", 17, 14, 2, FivePrime, "N"),
    ("BclI", "TGATCA", 1, -1, 4, FivePrime, "BCJMNORSVX"),
    ("BglI", "GCCNNNNNGGC", 7, -7, 3, ThreePrime, "BIJKMNOQRVX"),
    ("BglII", "AGATCT", 1, -1, 4, FivePrime, "BIJKMNORSVXY"),
    ("BpmI", "CTGGAG", 22, 14, 2, ThreePrime, "IN"),
    ("BsaAI", "YACGTR", 3, -3, 0, Blunt, "N"),
    ("BsaHI", "GRCGYC", 2, -2, 2, FivePrime, "N"),
    ("BsaI", "GGTCTC", 7, 5, 4, FivePrime, "N"),
    ("BsaJI", "CCNNGG", 1, -1, 4, FivePrime, "N"),
    ("BseRI", "GAGGAG", 16, 8, 2, ThreePrime, "N"),
    ("BsiEI", "CGRYCG", 4, -4, 2, ThreePrime, "N"),
    ("BsiHKAI", "GWGCWC", 5, -5, 4, ThreePrime, "N"),
    ("BsiWI", "CGTACG", 1, -1, 4, FivePrime, "N"),
    ("BslI", "CCNNNNNNNGG", 7, -7, 3, ThreePrime, "N"),
    ("BsmAI", "GTCTC", 6, 5, 4, FivePrime, "N"),
    ("BsmBI", "CGTCTC", 7, 5, 4, FivePrime, "N"),
    ("BsmFI", "GGGAC", 15, 14, 4, FivePrime, "N"),
    ("Bsp1286I", "GDGCHC", 5, -5, 4, ThreePrime, "JKN"),
    ("BspMI", "ACCTGC", 10, 8, 4, FivePrime, "N"),
    ("BsrDI", "GCAATG", 8, 0, 2, ThreePrime, "N"),
    ("BsrGI", "TGTACA", 1, -1, 4, FivePrime, "NR"),
    ("BsrI", "ACTGG", 6, -1, 2, ThreePrime, "N"),
    ("BssHII", "GCGCGC", 1, -1, 4, FivePrime, "JMNORS"),
    ("BstEII", "GGTNACC", 1, -1, 5, FivePrime, "BJNO"),
    ("BtgZI", "GCGATG", 16, 14, 4, FivePrime, "N"),
    ("BtsCI", "GGATG", 7, 0, 2, ThreePrime, "N"),
    ("BtsI", "GCAGTG", 8, 0, 2, ThreePrime, "N"),
    ("ClaI", "ATCGAT", 2, -2, 2, FivePrime, "BKMNORSV"),
    ("DpnI", "GATC", 2, -2, 0, Blunt, "BEN"),
    ("DraI", "TTTAAA", 3, -3, 0, Blunt, "BIJKMNORSVXY"),
    ("DraIII", "CACNNNGTG", 6, -6, 3, ThreePrime, "IMNV"),
    ("EagI", "CGGCCG", 1, -1, 4, FivePrime, "BNX"),
    ("EarI", "CTCTTC", 7, 4, 3, FivePrime, "N"),
    ("EciI", "GGCGGA", 17, 9, 2, ThreePrime, "N"),
    ("Eco31I", "GGTCTC", 7, 5, 4, FivePrime, "B"),
    ("EcoRI", "GAATTC", 1, -1, 4, FivePrime, "BCEIJKMNORSVXY"),
    ("EcoRV", "GATATC", 3, -3, 0, Blunt, "BCIJKMNORSVX"),
    ("Esp3I", "CGTCTC", 7, 5, 4, FivePrime, "B"),
    ("FauI", "CCCGC", 9, 6, 2, FivePrime, "IN"),
    ("FokI", "GGATG", 14, 13, 4, FivePrime, "BIJKMNVX"),
    ("FseI", "GGCCGGCC", 6, -6, 4, ThreePrime, "N"),
    ("HaeIII", "GGCC", 2, -2, 0, Blunt, "BCIJKMNORSVXY"),
    ("HgaI", "GACGC", 10, 10, 5, FivePrime, "N"),
    ("HhaI", "GCGC", 3, -3, 2, ThreePrime, "BJKMNORSX"),
    ("HincII", "GTYRAC", 3, -3, 0, Blunt, "BIJKNORX"),
    ("HindIII", "AAGCTT", 1, -1, 4, FivePrime, "BCIJKMNORSVXY"),
    ("HinfI", "GANTC", 1, -1, 3, FivePrime, "BCIJKMNORSVXY"),
    ("HpaI", "GTTAAC", 3, -3, 0, Blunt, "BIJKMNRSV"),
    ("HpaII", "CCGG", 1, -1, 2, FivePrime, "BIJKMNOQRSVX"),
    ("HphI", "GGTGA", 13, 7, 1, ThreePrime, "BN"),
    ("Hpy188I", "TCNGA", 3, -3, 1, ThreePrime, "N"),
    ("KpnI", "GGTACC", 5, -5, 4, ThreePrime, "BCIJKMNORSVXY"),
    ("MboI", "GATC", 0, 0, 4, FivePrime, "BCIKNOQRX"),
    ("MboII", "GAAGA", 13, 7, 1, ThreePrime, "BIKNRVX"),
    ("MluI", "ACGCGT", 1, -1, 4, FivePrime, "BIJKMNORSVX"),
    ("MlyI", "GAGTC", 10, 5, 0, Blunt, "N"),
    ("MmeI", "TCCRAC", 26, 18, 2, ThreePrime, "N"),
    ("MseI", "TTAA", 1, -1, 2, FivePrime, "IN"),
    ("MslI", "CAYNNNNRTG", 5, -5, 0, Blunt, "N"),
    ("MspI", "CCGG", 1, -1, 2, FivePrime, "BCIJKMNOQRVXY"),
    ("NaeI", "GCCGGC", 3, -3, 0, Blunt, "CKN"),
    ("NcoI", "CCATGG", 1, -1, 4, FivePrime, "BCJKMNORSX"),
    ("NdeI", "CATATG", 2, -2, 2, FivePrime, "BJKMNQRSVX"),
    ("NheI", "GCTAGC", 1, -1, 4, FivePrime, "BJKMNORSVX"),
    ("NlaIII", "CATG", 4, -4, 4, ThreePrime, "N"),
    ("NotI", "GCGGCCGC", 2, -2, 4, FivePrime, "BCJKMNOQRSX"),
    ("NruI", "TCGCGA", 3, -3, 0, Blunt, "BJKMNRX"),
    ("NsiI", "ATGCAT", 5, -5, 4, ThreePrime, "BJMNRSVX"),
    ("PacI", "TTAATTAA", 5, -5, 2, ThreePrime, "BNO"),
    ("PflMI", "CCANNNNNTGG", 7, -7, 3, ThreePrime, "N"),
    ("PleI", "GAGTC", 9, 5, 1, FivePrime, "N"),
    ("PmeI", "GTTTAAAC", 4, -4, 0, Blunt, "N"),
    ("PstI", "CTGCAG", 5, -5, 4, ThreePrime, "BCEIJKMNORSVXY"),
    ("PvuI", "CGATCG", 4, -4, 2, ThreePrime, "BKMNORSX"),
    ("PvuII", "CAGCTG", 3, -3, 0, Blunt, "BIJKMNORSXY"),
    ("SacI", "GAGCTC", 5, -5, 4, ThreePrime, "BJKMNORSX"),
    ("SacII", "CCGCGG", 4, -4, 2, ThreePrime, "BJKNOR"),
    ("SalI", "GTCGAC", 1, -1, 4, FivePrime, "BCIJKMNORSVXY"),
    ("SapI", "GCTCTTC", 8, 4, 3, FivePrime, "N"),
    ("Sau3AI", "GATC", 0, 0, 4, FivePrime, "CJKMNR"),
    ("SbfI", "CCTGCAGG", 6, -6, 4, ThreePrime, "BINV"),
    ("ScaI", "AGTACT", 3, -3, 0, Blunt, "BCJKMNORSX"),
    ("SfaNI", "GCATC", 10, 9, 4, FivePrime, "IN"),
    ("SfiI", "GGCCNNNNNGGCC", 8, -8, 3, ThreePrime, "BCJKMNOQRSVX"),
    ("SmaI", "CCCGGG", 3, -3, 0, Blunt, "BIJKMNORSVXY"),
    ("SnaBI", "TACGTA", 3, -3, 0, Blunt, "CKMNR"),
    ("SpeI", "ACTAGT", 1, -1, 4, FivePrime, "BJKMNORSX"),
    ("SphI", "GCATGC", 5, -5, 4, ThreePrime, "BCIJKMNORSVX"),
    ("SspI", "AATATT", 3, -3, 0, Blunt, "BCIJKMNORSVX"),
    ("StuI", "AGGCCT", 3, -3, 0, Blunt, "BJKMNRX"),
    ("StyI", "CCWWGG", 1, -1, 4, FivePrime, "BJMNRS"),
    ("SwaI", "ATTTAAAT", 4, -4, 0, Blunt, "JMN"),
    ("TaqI", "TCGA", 1, -1, 2, FivePrime, "BCIJKMNQRSVX"),
    ("XbaI", "TCTAGA", 1, -1, 4, FivePrime, "BCIJKMNORSVXY"),
    ("XhoI", "CTCGAG", 1, -1, 4, FivePrime, "BCJKMNORSVX"),
    ("XmaI", "CCCGGG", 1, -1, 4, FivePrime, "IJNRV"),
    ("XmnI", "GAANNNNTTC", 5, -5, 0, Blunt, "BNR"),
    ("ZraI", "GACGTC", 3, -3, 0, Blunt, "IN"),
];
