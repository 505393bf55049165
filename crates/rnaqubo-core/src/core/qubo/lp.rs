//! CPLEX LP text rendering of a [`QuadraticProgram`].
//!
//! The layout follows the format the common LP readers accept: a `Minimize` section whose
//! `obj:` row lists the linear terms and a `[ ... ]/2` block of doubled quadratic terms,
//! an empty `Subject To` section, unit `Bounds` and a `Binaries` declaration.

use super::program::QuadraticProgram;
use std::fmt::Write;

const BINARIES_PER_LINE: usize = 8;

pub fn to_lp_string(program: &QuadraticProgram) -> String {
    let mut out = String::new();
    let names = program.variable_names();

    out.push_str("\\ This file has been generated by rnaqubo\n");
    out.push_str("\\ ENCODING=ISO-8859-1\n");
    let _ = writeln!(out, "\\Problem name: {}", program.name());
    out.push('\n');

    out.push_str("Minimize\n obj:");
    if let Some(objective) = program.objective() {
        let mut first = true;
        for (&k, &v) in &objective.linear {
            if v != 0.0 {
                push_term(&mut out, &mut first, v, &names[k]);
            }
        }

        let quadratic: Vec<_> = objective
            .quadratic
            .iter()
            .filter(|(_, v)| **v != 0.0)
            .collect();
        if !quadratic.is_empty() {
            out.push_str(if first { " [" } else { " + [" });
            let mut first_quadratic = true;
            for (&(a, b), &v) in quadratic {
                let body = format!("{}*{}", names[a], names[b]);
                push_term(&mut out, &mut first_quadratic, 2.0 * v, &body);
            }
            out.push_str(" ]/2");
        }
    }
    out.push('\n');

    out.push_str("Subject To\n\n");

    out.push_str("Bounds\n");
    for name in names {
        let _ = writeln!(out, " 0 <= {name} <= 1");
    }
    out.push('\n');

    if !names.is_empty() {
        out.push_str("Binaries\n");
        for chunk in names.chunks(BINARIES_PER_LINE) {
            let _ = writeln!(out, " {}", chunk.join(" "));
        }
    }
    out.push_str("End\n");
    out
}

fn push_term(out: &mut String, first: &mut bool, coefficient: f64, body: &str) {
    let magnitude = coefficient.abs();
    match (*first, coefficient < 0.0) {
        (true, false) => {
            let _ = write!(out, " {magnitude} {body}");
        }
        (true, true) => {
            let _ = write!(out, " - {magnitude} {body}");
        }
        (false, false) => {
            let _ = write!(out, " + {magnitude} {body}");
        }
        (false, true) => {
            let _ = write!(out, " - {magnitude} {body}");
        }
    }
    *first = false;
}

#[cfg(test)]
mod tests {
    use crate::core::qubo::program::QuadraticProgram;
    use crate::core::qubo::traits::{LinearTerms, QuadraticTerms, QuboObjective};

    fn sample_program() -> QuadraticProgram {
        let mut program = QuadraticProgram::new("RNA-Folding-QUBO");
        for name in ["q_0_7_1_6", "q_0_9_1_8", "q_1_8_2_7"] {
            program.add_binary_variable(name).unwrap();
        }
        let linear = LinearTerms::from([(0, 0.0), (1, -3.3), (2, 1.25)]);
        let quadratic = QuadraticTerms::from([((0, 2), 100.0), ((0, 1), -1.5)]);
        program.minimize(&linear, &quadratic).unwrap();
        program
    }

    #[test]
    fn header_contains_problem_name() {
        let lp = sample_program().export_lp_string();
        assert!(lp.contains("\\Problem name: RNA-Folding-QUBO\n"));
    }

    #[test]
    fn objective_row_lists_nonzero_linear_terms_then_doubled_quadratic_block() {
        let lp = sample_program().export_lp_string();
        assert!(
            lp.contains(
                " obj: - 3.3 q_0_9_1_8 + 1.25 q_1_8_2_7 + [ - 3 q_0_7_1_6*q_0_9_1_8 + 200 q_0_7_1_6*q_1_8_2_7 ]/2\n"
            ),
            "{lp}"
        );
    }

    #[test]
    fn bounds_and_binaries_cover_every_variable() {
        let lp = sample_program().export_lp_string();
        assert!(lp.contains(" 0 <= q_0_7_1_6 <= 1\n"));
        assert!(lp.contains(" 0 <= q_1_8_2_7 <= 1\n"));
        assert!(lp.contains("Binaries\n q_0_7_1_6 q_0_9_1_8 q_1_8_2_7\n"));
        assert!(lp.ends_with("End\n"));
    }

    #[test]
    fn quadratic_only_objective_has_no_leading_plus() {
        let mut program = QuadraticProgram::new("p");
        program.add_binary_variable("a").unwrap();
        program.add_binary_variable("b").unwrap();
        program
            .minimize(&LinearTerms::new(), &QuadraticTerms::from([((0, 1), 0.5)]))
            .unwrap();
        assert!(program.export_lp_string().contains(" obj: [ 1 a*b ]/2\n"));
    }

    #[test]
    fn empty_program_renders_skeleton() {
        let lp = QuadraticProgram::new("empty").export_lp_string();
        assert!(lp.contains("Minimize\n obj:\nSubject To"));
        assert!(!lp.contains("Binaries"));
        assert!(lp.ends_with("End\n"));
    }
}
