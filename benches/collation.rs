//! Benchmarks for collation and article flattening.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use vortaro::Dictionary;
use vortaro::collate::{compare, sort_words};

const ARTICLE: &str = r#"<?xml version="1.0"?>
<vortaro>
<art>
<kap><ofc>*</ofc><rad>sekv</rad>/i</kap>
<drv mrk="sekv.0i">
  <kap><ofc>*</ofc><tld/>i</kap>
  <gra><vspec>tr</vspec></gra>
  <snc mrk="sekv.0i.postiri">
    <dif>
      Iri post movi&gcirc;anta objekto a&ubreve; persono:
      <ekz>la hundo <tld/>is la veturilon<fnt><bib>Z</bib></fnt>;</ekz>
      <ekz><tld/>u min<fnt><bib>MT</bib><lok>Rea 6:14</lok></fnt>,</ekz>
      <ekz>kaj mi iros<fnt>Z</fnt>.</ekz>
    </dif>
    <trd lng="fr">suivre</trd>
    <trdgrp lng="de"><trd>folgen;</trd> <trd>nachgehen</trd></trdgrp>
  </snc>
  <snc>
    <uzo tip="stl">FIG</uzo>
    <dif>Dividi ies opinion, morojn, konduton:</dif>
    <rim>Vidu ankaŭ <ctl>imiti</ctl>.</rim>
    <ref tip="sin" cel="imit.0i">imiti</ref>
  </snc>
</drv>
<drv mrk="sekv.0o"><kap><tld/>o</kap><snc><ref tip="dif" cel="sekv.0ajxo">sekvaĵo</ref></snc></drv>
</art>
</vortaro>"#;

fn word_list() -> Vec<String> {
    let stems = ["ĉiel", "adiaŭ", "sekv", "ŝip", "hund", "ĥor", "bank", "a b", "-ad-", "zebr"];
    let endings = ["o", "a", "i", "oj", "ejo", "isto", "ul", "1"];
    stems
        .iter()
        .flat_map(|stem| endings.iter().map(move |ending| format!("{stem}{ending}")))
        .cycle()
        .take(5_000)
        .collect()
}

fn bench_collation(c: &mut Criterion) {
    let words = word_list();

    c.bench_function("compare_pair", |b| {
        b.iter(|| compare(black_box("ĉielarko"), black_box("ĉielarkoj")))
    });

    c.bench_function("sort_5000_words", |b| {
        b.iter(|| {
            let mut words = words.clone();
            sort_words(&mut words);
            black_box(words)
        })
    });
}

fn bench_flatten(c: &mut Criterion) {
    c.bench_function("add_document", |b| {
        b.iter(|| {
            let mut dictionary = Dictionary::new();
            dictionary
                .add_document(black_box(ARTICLE.as_bytes()))
                .unwrap();
            black_box(dictionary)
        })
    });
}

criterion_group!(benches, bench_collation, bench_flatten);
criterion_main!(benches);
