use argsift::CommandLineParser;

fn main() {
    let parser = CommandLineParser::new().params(["-s", "--start"]).build();
    let arguments = parser.parse();

    let start: i64 = match arguments.get_or(["s", "start"], 0) {
        Ok(start) => start,
        Err(e) => {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        }
    };
    let mut sum = start;

    for index in 0..arguments.len() {
        match arguments.get_at::<i64>(index) {
            Ok(item) => sum += item,
            Err(e) => {
                eprintln!("Parse error: {e}");
                std::process::exit(1);
            }
        }
    }

    if arguments.flag(["v", "verbose"]) {
        println!("Items: {:?}", arguments.positionals());
    }

    println!("Sum: {sum}");
}
