//! Fixed substitution tables between legacy single-character fields and
//! their Delta numeric values.
//!
//! The same four tables serve both directions: legacy -> Delta by key,
//! Delta -> legacy by value.

/// A bidirectional legacy character <-> Delta value table.
#[derive(Debug)]
pub struct CodeMap {
    name: &'static str,
    pairs: &'static [(char, &'static str)],
    /// Legacy character written when a Delta value has no entry.
    default_charlie: char,
}

impl CodeMap {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Delta value for a legacy character.
    pub fn to_delta(&self, ch: char) -> Option<&'static str> {
        self.pairs
            .iter()
            .find(|(key, _)| *key == ch)
            .map(|(_, value)| *value)
    }

    /// Legacy character for a Delta value.
    pub fn to_charlie(&self, value: &str) -> Option<char> {
        self.pairs
            .iter()
            .find(|(_, candidate)| *candidate == value)
            .map(|(key, _)| *key)
    }

    /// Legacy character for a Delta value, or this table's default.
    pub fn to_charlie_or_default(&self, value: &str) -> char {
        self.to_charlie(value).unwrap_or(self.default_charlie)
    }

    pub fn default_charlie(&self) -> char {
        self.default_charlie
    }
}

/// Legacy index 1 <-> Delta digit 4.
pub static AFFILIATION: CodeMap = CodeMap {
    name: "affiliation",
    pairs: &[
        ('P', "0"),
        ('U', "1"),
        ('A', "2"),
        ('F', "3"),
        ('N', "4"),
        ('S', "5"),
        ('H', "6"),
    ],
    default_charlie: 'U',
};

/// Legacy index 3 <-> Delta digit 7.
pub static STATUS: CodeMap = CodeMap {
    name: "status",
    pairs: &[
        ('P', "0"),
        ('A', "1"),
        ('C', "2"),
        ('D', "3"),
        ('X', "4"),
        ('F', "5"),
    ],
    default_charlie: 'P',
};

/// Legacy index 10 <-> Delta digit 8.
pub static HQ_TF_FD: CodeMap = CodeMap {
    name: "hq_tf_fd",
    pairs: &[
        ('-', "0"),
        ('F', "1"),
        ('A', "2"),
        ('C', "3"),
        ('E', "4"),
        ('G', "5"),
        ('B', "6"),
        ('D', "7"),
    ],
    default_charlie: '-',
};

/// Legacy index 11 <-> Delta digits 9-10.
///
/// Region is 'M' (21-26 run Division..Command, I..N).
pub static ECHELON_MOBILITY: CodeMap = CodeMap {
    name: "echelon_mobility",
    pairs: &[
        ('-', "00"),
        // Echelon at and below brigade
        ('A', "11"),
        ('B', "12"),
        ('C', "13"),
        ('D', "14"),
        ('E', "15"),
        ('F', "16"),
        ('G', "17"),
        ('H', "18"),
        // Echelon above brigade
        ('I', "21"),
        ('J', "22"),
        ('K', "23"),
        ('L', "24"),
        ('M', "25"),
        ('N', "26"),
        // Land mobility
        ('O', "31"),
        ('P', "32"),
        ('Q', "33"),
        ('R', "34"),
        ('S', "35"),
        ('T', "36"),
        ('W', "37"),
        // Towed array
        ('U', "41"),
        ('V', "42"),
        // Leadership
        ('X', "51"),
        ('Y', "52"),
    ],
    default_charlie: '-',
};

/// Echelon labels used by feature attributes and the two legacy characters
/// (indices 10-11) they stand for.
static ECHELON_LABELS: &[(&str, &str)] = &[
    ("TEAM/CREW", "-A"),
    ("SQUAD", "-B"),
    ("SECTION", "-C"),
    ("PLATOON/DETACHMENT", "-D"),
    ("COMPANY/BATTERY/TROOP", "-E"),
    ("BATTALION/SQUADRON", "-F"),
    ("REGIMENT/GROUP", "-G"),
    ("BRIGADE", "-H"),
    ("DIVISION", "-I"),
    ("CORPS/MEF", "-J"),
    ("ARMY", "-K"),
    ("ARMY GROUP/FRONT", "-L"),
    ("REGION", "-M"),
    ("COMMAND", "-N"),
];

/// Legacy indices 10-11 for an echelon label such as "BATTALION/SQUADRON".
pub fn echelon_label_suffix(label: &str) -> Option<&'static str> {
    let label = label.trim();
    ECHELON_LABELS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(label))
        .map(|(_, suffix)| *suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affiliation_both_directions() {
        assert_eq!(AFFILIATION.to_delta('F'), Some("3"));
        assert_eq!(AFFILIATION.to_charlie("6"), Some('H'));
        assert_eq!(AFFILIATION.to_delta('*'), None);
        assert_eq!(AFFILIATION.to_charlie_or_default("9"), 'U');
    }

    #[test]
    fn test_defaults() {
        assert_eq!(STATUS.to_charlie_or_default("9"), 'P');
        assert_eq!(HQ_TF_FD.to_charlie_or_default("9"), '-');
        assert_eq!(ECHELON_MOBILITY.to_charlie_or_default("99"), '-');
    }

    #[test]
    fn test_echelon_region_and_command_are_distinct() {
        assert_eq!(ECHELON_MOBILITY.to_delta('M'), Some("25"));
        assert_eq!(ECHELON_MOBILITY.to_delta('N'), Some("26"));
        assert_eq!(ECHELON_MOBILITY.to_charlie("25"), Some('M'));
        assert_eq!(ECHELON_MOBILITY.to_charlie("26"), Some('N'));
    }

    #[test]
    fn test_every_table_round_trips() {
        for map in [&AFFILIATION, &STATUS, &HQ_TF_FD, &ECHELON_MOBILITY] {
            for (key, value) in map.pairs {
                assert_eq!(map.to_charlie(value), Some(*key), "table {}", map.name());
            }
        }
    }

    #[test]
    fn test_echelon_label_suffix() {
        assert_eq!(echelon_label_suffix("BATTALION/SQUADRON"), Some("-F"));
        assert_eq!(echelon_label_suffix("command"), Some("-N"));
        assert_eq!(echelon_label_suffix(""), None);
        assert_eq!(echelon_label_suffix("FLEET"), None);
    }
}
