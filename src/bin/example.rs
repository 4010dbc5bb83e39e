//! Raft Mesher Example - Two-Pedestal Mat Foundation

use anyhow::Result;
use chrono::NaiveDate;
use raft_mesher::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Raft Mesher Example: 6m x 4m Mat Foundation ===\n");

    // 6m x 4m plan, 0.2m mesh, 250mm thick mat
    let mut plan = PlanSnapshot::new(6.0, 4.0, 0.2, 0.25)?;

    // Two pedestals on grid intersections, 500mm tall
    plan.add_pedestal(Pedestal::new(1, 2.0, 2.0, 0.5, 0.4))?;
    plan.add_pedestal(Pedestal::new(2, 4.0, 2.0, 0.5, 0.4))?;
    let plan = plan.with_pedestal_height(0.5)?;

    let model = FoundationModel::generate(&plan);

    println!("Grid:    {} x-lines, {} z-lines", model.grid.x_lines.len(), model.grid.z_lines.len());
    println!("Mesh:    {} nodes, {} plates, {} members", model.mesh.nodes.len(), model.mesh.plates.len(), model.mesh.members.len());
    println!(
        "Groups:  {} moment, {} one-way shear, {} two-way shear plates",
        model.groups.moment.len(),
        model.groups.one_way_shear.len(),
        model.groups.two_way_shear.len()
    );

    for pedestal in &plan.pedestals {
        if let Some(bounds) = model.group_bounds(pedestal.id) {
            if let Some(rect) = bounds.moment {
                println!(
                    "Pedestal {}: moment zone {:.2}m x {:.2}m at ({:.2}, {:.2})",
                    pedestal.id, rect.width, rect.height, rect.x, rect.y
                );
            }
        }
    }

    let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date");
    println!("\n=== STAAD Input Deck ===\n");
    println!("{}", model.to_staad(date));

    Ok(())
}
