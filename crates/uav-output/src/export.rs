//! Writing a finished solution and the instance it was planned on.

use uav_grid::Grid;
use uav_route::RouteTable;

use crate::row::{BaseRow, CellRow, RouteRow, UrgencyRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Write `table` tick-major (agents ascending within a tick), followed by
/// the grid's bases, obstacles and urgent cells.
///
/// Does not call [`OutputWriter::finish`].
pub fn export_solution<W: OutputWriter>(writer: &mut W, grid: &Grid, table: &RouteTable) -> OutputResult<()> {
    let mut routes = Vec::with_capacity(table.agent_count());
    for t in 0..table.horizon() {
        routes.clear();
        routes.extend(table.at_tick(t).map(|(agent, pos)| RouteRow {
            tick:  t as u32,
            agent: agent.0,
            row:   pos.row,
            col:   pos.col,
        }));
        writer.write_routes(&routes)?;
    }

    let bases: Vec<BaseRow> = grid
        .bases()
        .iter()
        .enumerate()
        .map(|(index, b)| BaseRow {
            index,
            id:  b.id.0,
            row: b.position.row,
            col: b.position.col,
        })
        .collect();
    writer.write_bases(&bases)?;

    let obstacles: Vec<CellRow> = grid
        .obstacles()
        .map(|p| CellRow { row: p.row, col: p.col })
        .collect();
    writer.write_obstacles(&obstacles)?;

    let urgencies: Vec<UrgencyRow> = grid
        .urgent_positions()
        .iter()
        .map(|&p| UrgencyRow { row: p.row, col: p.col, weight: grid.urgency(p) })
        .collect();
    writer.write_urgencies(&urgencies)?;

    tracing::debug!(
        agents = table.agent_count(),
        horizon = table.horizon(),
        bases = bases.len(),
        obstacles = obstacles.len(),
        urgent = urgencies.len(),
        "solution exported"
    );
    Ok(())
}
