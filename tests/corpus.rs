use std::{
    fs,
    io::{stdout, Write},
};

use jpat::Parse;

#[test]
fn test_corpus() {
    const DIR: &str = "./tests/corpus";
    let _ = writeln!(stdout(), "parsing all inputs in {DIR:?}");
    for dir in fs::read_dir(DIR).expect("could not list dir") {
        let path = dir.expect("could not read dir entry").path();
        let parse: fn(&str) -> Parse = match path.file_stem().and_then(|stem| stem.to_str()) {
            Some("patterns") => jpat::parse_pattern,
            Some("expressions") => jpat::parse_expression,
            Some("switch_labels") => jpat::parse_switch_label,
            _ => {
                let _ = writeln!(stdout(), "skipping file {path:?}");
                continue;
            }
        };
        let input = fs::read_to_string(&path).expect("could not read file contents");
        for line in input.lines().filter(|line| !line.trim().is_empty()) {
            let result = parse(line);
            assert!(
                result.errors().is_empty(),
                "error encountered parsing {line:?} from {path:?}:\n{}\n{}",
                result.diagnostics(),
                result.debug_tree()
            );
            assert_eq!(result.syntax().text().to_string(), line);
        }
    }
}
