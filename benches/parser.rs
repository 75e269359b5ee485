use criterion::{black_box, criterion_group, criterion_main, Criterion};

use std::fs;

use jpat::Parse;

pub fn benchmark_parser(c: &mut Criterion) {
    const DIR: &str = "./tests/corpus";
    for dir in fs::read_dir(DIR).expect("could not list dir") {
        let path = dir.expect("could not read dir entry").path();
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let parse: fn(&str) -> Parse = match stem {
            "patterns" => jpat::parse_pattern,
            "expressions" => jpat::parse_expression,
            "switch_labels" => jpat::parse_switch_label,
            _ => continue,
        };
        let input = fs::read_to_string(&path).expect("could not read file contents");
        let lines: Vec<_> = input.lines().filter(|line| !line.trim().is_empty()).collect();
        c.bench_function(&format!("parse {stem}"), |b| {
            b.iter(|| {
                for line in &lines {
                    black_box(parse(black_box(line)));
                }
            });
        });
    }
}

criterion_group!(parser, benchmark_parser);
criterion_main!(parser);
