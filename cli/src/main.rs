use rainbow_table_lib::write_default_tables;

fn main() {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    write_default_tables(&mut out).expect("failed to write color tables");
}
