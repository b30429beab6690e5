//! Graphviz DOT script generation for predicted structures.
//!
//! The script colors nucleotide nodes by base, connects consecutive
//! positions along the backbone, and adds one edge per predicted
//! pair. Rendering the script is left to an external layout tool
//! (e.g. `neato -Tpng`); this module only produces the text.

use nf_folding::Base;
use nf_folding::NucleotideVec;
use nf_structure::PairList;

fn node_color(base: Base) -> &'static str {
    match base {
        Base::A => "red",
        Base::C => "blue",
        Base::G => "green",
        Base::U => "yellow",
        Base::N => "gray",
    }
}

/// Build a DOT script for a sequence and its predicted pairs.
pub fn dot_script(sequence: &NucleotideVec, pairs: &PairList) -> String {
    let mut dot = String::from("graph structure {\n");
    dot.push_str("  bgcolor=\"transparent\";\n");
    dot.push_str("  splines=polyline;\n");
    dot.push_str("  overlap=scale;\n");
    dot.push_str("  size=\"50,50\";\n");

    for (i, &base) in sequence.iter().enumerate() {
        dot.push_str(&format!(
            "  {} [label=\"{}\", fontcolor=\"black\", fillcolor=\"{}\", style=filled];\n",
            i,
            base,
            node_color(base),
        ));
        if i > 0 {
            // backbone edge
            dot.push_str(&format!(
                "  {} -- {} [color=white, penwidth=10.0];\n",
                i - 1,
                i,
            ));
        }
    }

    for &(i, j) in &pairs.pairs {
        dot.push_str(&format!(
            "  {} -- {} [color=lightgrey, penwidth=10.0];\n",
            i, j,
        ));
    }

    dot.push_str("}\n");
    dot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_script_edges() {
        let seq = NucleotideVec::try_from("GAAC").unwrap();
        let pairs = PairList { length: 4, pairs: vec![(0, 3)] };
        let dot = dot_script(&seq, &pairs);

        assert!(dot.starts_with("graph structure {"));
        assert!(dot.ends_with("}\n"));
        // three backbone edges, one bond
        assert_eq!(dot.matches("color=white").count(), 3);
        assert_eq!(dot.matches("color=lightgrey").count(), 1);
        assert!(dot.contains("0 -- 3"));
    }

    #[test]
    fn test_dot_script_node_colors() {
        let seq = NucleotideVec::from_lossy("ACGUX");
        let pairs = PairList::new(5);
        let dot = dot_script(&seq, &pairs);
        for color in ["red", "blue", "green", "yellow", "gray"] {
            assert!(dot.contains(&format!("fillcolor=\"{}\"", color)));
        }
    }

    #[test]
    fn test_dot_script_empty_sequence() {
        let seq = NucleotideVec::try_from("").unwrap();
        let pairs = PairList::new(0);
        let dot = dot_script(&seq, &pairs);
        assert_eq!(dot, "graph structure {\n  bgcolor=\"transparent\";\n  splines=polyline;\n  overlap=scale;\n  size=\"50,50\";\n}\n");
    }
}
