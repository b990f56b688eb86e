//! Console number-guessing game.

use std::io;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    kv_gateway::game::play(&mut input, &mut output, &mut rand::thread_rng())?;
    Ok(())
}
