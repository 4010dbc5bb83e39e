//! STAAD.Pro input deck generation
//!
//! Serializes the synthesized mesh and design groups into the fixed-format
//! STAAD text protocol: packed joint/incidence lines capped at 74 columns,
//! group id lists capped at 60 columns with `-` continuations, and the
//! literal concrete material block.

use chrono::NaiveDate;

use crate::elements::Pedestal;
use crate::groups::{DesignGroups, GroupKind};
use crate::mesh::FoundationMesh;

pub struct StaadGenerator;

impl StaadGenerator {
    /// Joint/incidence lines must not exceed this width, terminator included.
    const DATA_LINE_LIMIT: usize = 74;
    /// Group lines must not exceed this width, continuation marker included.
    const GROUP_LINE_LIMIT: usize = 60;

    pub fn new() -> Self {
        Self
    }

    /// Render the complete deck. Deterministic for fixed inputs; the header
    /// date is injected by the caller.
    pub fn generate(
        &self,
        mesh: &FoundationMesh,
        groups: &DesignGroups,
        plate_thickness: f64,
        pedestals: &[Pedestal],
        date: NaiveDate,
    ) -> String {
        let mut deck = String::new();

        deck.push_str("STAAD SPACE\n");
        deck.push_str("START JOB INFORMATION\n");
        deck.push_str(&format!("ENGINEER DATE {}\n", date.format("%d-%b-%y")));
        deck.push_str("END JOB INFORMATION\n");
        deck.push_str("INPUT WIDTH 79\n");
        deck.push_str("UNIT METER KN\n");

        deck.push_str("JOINT COORDINATES\n");
        self.pack_data_lines(
            mesh.nodes.iter().map(|n| {
                format!(
                    "{} {} {} {}",
                    n.id,
                    format_value(n.x),
                    format_value(n.y),
                    format_value(n.z)
                )
            }),
            &mut deck,
        );

        deck.push_str("ELEMENT INCIDENCES SHELL\n");
        self.pack_data_lines(
            mesh.plates.iter().map(|p| {
                format!(
                    "{} {} {} {} {}",
                    p.id, p.nodes[0], p.nodes[1], p.nodes[2], p.nodes[3]
                )
            }),
            &mut deck,
        );

        if !groups.is_empty() {
            deck.push_str("START GROUP DEFINITION\n");
            deck.push_str("ELEMENT\n");
            for kind in [GroupKind::Moment, GroupKind::OneWayShear, GroupKind::TwoWayShear] {
                let ids = groups.plates(kind);
                if !ids.is_empty() {
                    self.pack_group_lines(kind.staad_name(), ids, &mut deck);
                }
            }
            deck.push_str("END GROUP DEFINITION\n");
        }

        let last_plate_id = mesh.plates.len() as u32;
        if last_plate_id > 0 {
            deck.push_str("ELEMENT PROPERTY\n");
            deck.push_str(&format!(
                "1 TO {} THICKNESS {};\n",
                last_plate_id,
                format_value(plate_thickness)
            ));
        }

        if !mesh.members.is_empty() {
            deck.push_str("MEMBER INCIDENCES\n");
            self.pack_data_lines(
                mesh.members.iter().map(|m| {
                    format!("{} {} {}", last_plate_id + m.id, m.start_node, m.end_node)
                }),
                &mut deck,
            );
        }

        deck.push_str("DEFINE MATERIAL START\n");
        deck.push_str("ISOTROPIC CONCRETE\n");
        deck.push_str("E 2.17185e+07\n");
        deck.push_str("POISSON 0.17\n");
        deck.push_str("DENSITY 23.5616\n");
        deck.push_str("ALPHA 1e-05\n");
        deck.push_str("DAMP 0.05\n");
        deck.push_str("G 9.28139e+06\n");
        deck.push_str("TYPE CONCRETE\n");
        deck.push_str("STRENGTH FCU 27579\n");
        deck.push_str("END DEFINE MATERIAL\n");
        deck.push_str("CONSTANTS\n");
        deck.push_str("MATERIAL CONCRETE ALL\n");

        if !mesh.members.is_empty() {
            deck.push_str("MEMBER PROPERTY\n");
            for member in &mesh.members {
                if let Some(pedestal) = pedestals.iter().find(|p| p.id == member.pedestal_id) {
                    deck.push_str(&format!(
                        "{} PRISM YD {} ZD {};\n",
                        last_plate_id + member.id,
                        format_value(pedestal.length),
                        format_value(pedestal.width)
                    ));
                }
            }
        }

        deck.push_str("FINISH\n");
        deck
    }

    /// Pack `"; "`-joined tokens into `;`-terminated lines no wider than
    /// [`Self::DATA_LINE_LIMIT`].
    fn pack_data_lines(&self, tokens: impl Iterator<Item = String>, out: &mut String) {
        let mut line = String::new();
        for token in tokens {
            if line.is_empty() {
                line = token;
            } else if line.len() + 2 + token.len() + 1 <= Self::DATA_LINE_LIMIT {
                line.push_str("; ");
                line.push_str(&token);
            } else {
                out.push_str(&line);
                out.push_str(";\n");
                line = token;
            }
        }
        if !line.is_empty() {
            out.push_str(&line);
            out.push_str(";\n");
        }
    }

    /// Pack group plate ids into lines no wider than
    /// [`Self::GROUP_LINE_LIMIT`]. The group name opens the first line only;
    /// wrapped lines end with the ` -` continuation marker and resume with a
    /// bare id.
    fn pack_group_lines(&self, name: &str, ids: &[u32], out: &mut String) {
        let mut line = String::from(name);
        for id in ids {
            let token = id.to_string();
            if line.len() + 1 + token.len() + 2 <= Self::GROUP_LINE_LIMIT {
                line.push(' ');
                line.push_str(&token);
            } else {
                out.push_str(&line);
                out.push_str(" -\n");
                line = token;
            }
        }
        out.push_str(&line);
        out.push('\n');
    }
}

impl Default for StaadGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to 3 decimals and print without trailing zeros (`0.2`, `3`,
/// `1.125`), the rendering the deck's column packing is calibrated for.
fn format_value(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}
