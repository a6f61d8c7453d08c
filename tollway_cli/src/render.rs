use comfy_table::Table;

use tollway_network::matrix::DistanceMatrix;

/// Renders a square matrix with checkpoint ids as row and column labels.
pub fn matrix_table(matrix: &DistanceMatrix) -> Table {
    let mut table = Table::new();

    let mut header = vec![String::new()];
    header.extend(matrix.checkpoint_ids().iter().map(|id| id.to_string()));
    table.set_header(header);

    for &row_id in matrix.checkpoint_ids() {
        let mut row = vec![row_id.to_string()];
        for &col_id in matrix.checkpoint_ids() {
            row.push(format!(
                "{:.1}",
                matrix.distance(row_id, col_id).unwrap_or(0.0)
            ));
        }
        table.add_row(row);
    }

    table
}
