//! Morphological lattice parsing.
//!
//! The analysis service returns a tab-separated lattice, one morpheme per line:
//!
//! ```text
//! from  to  form  lemma  cpostag  postag  features  token_id
//! ```
use crate::error::Error;

const LEMMA_COLUMN: usize = 3;

/// Lemmas of the lattice, in order.
pub fn lemmas(lattice: &str) -> Result<Vec<String>, Error> {
    lattice
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(nb, line)| {
            line.split('\t')
                .nth(LEMMA_COLUMN)
                .map(String::from)
                .ok_or_else(|| Error::Lattice(format!("line {} has no lemma: {:?}", nb, line)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lemmas() {
        let lattice = "0\t1\tה\tה\tDET\tDEF\t_\t1\n1\t2\tממשלה\tממשלה\tNOUN\tNN\tgen=F|num=S\t1\n2\t3\tאישרה\tאישר\tVERB\tVB\tgen=F\t2\n\n";
        assert_eq!(lemmas(lattice).unwrap(), vec!["ה", "ממשלה", "אישר"]);
    }

    #[test]
    fn truncated_line() {
        let lattice = "0\t1\tה\tה\tDET\tDEF\t_\t1\n1\t2\tממשלה\n";
        assert!(matches!(lemmas(lattice), Err(Error::Lattice(_))));
    }

    #[test]
    fn empty_lattice() {
        assert!(lemmas("").unwrap().is_empty());
    }
}
