use argsift::{CommandLineParser, Mode};

fn main() {
    let parser = CommandLineParser::new()
        .mode(Mode::PREFER_PARAM_FOR_UNREG_OPTION | Mode::SINGLE_DASH_IS_MULTIFLAG)
        .param("o")
        .build();
    let arguments = parser.parse();

    println!("positionals:");
    for positional in &arguments {
        println!("  {positional}");
    }

    println!("flags:");
    for flag in arguments.flags() {
        println!("  {flag}");
    }

    println!("parameters:");
    for (name, value) in arguments.params() {
        println!("  {name}={value}");
    }
}
