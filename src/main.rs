use materia::thread_data::ThreadData;
use materia::uci;

fn main() {
    println!("Materia static evaluator");

    let args: Vec<String> = std::env::args().collect();
    let mut td = ThreadData::new();

    if args.len() > 1 {
        let input: String = args[1..]
            .iter()
            .map(|arg| arg.trim())
            .collect::<Vec<&str>>()
            .join(" ");

        uci::run_command(&input, &mut td);
        return;
    }

    let mut input = String::new();
    loop {
        match std::io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => uci::run_command(&input, &mut td),
            Err(err) => {
                eprintln!("Error reading input: {err}");
                break;
            }
        }

        input.clear();
    }
}
