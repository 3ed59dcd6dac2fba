use ising_sim::Snapshot;

/// Text frame: `#` for spin up, `.` for spin down, one line per row.
pub fn frame(snapshot: &Snapshot<'_>) -> String {
    let mut out = String::with_capacity(snapshot.rows() * (snapshot.cols() + 1));
    for row in snapshot.rows_iter() {
        out.extend(row.iter().map(|&s| if s > 0 { '#' } else { '.' }));
        out.push('\n');
    }
    out
}
