use std::io;

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    sum3::run(&mut stdout.lock())
}
