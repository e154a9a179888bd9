use codspeed_criterion_compat::{
    Criterion, Throughput, black_box, criterion_group, criterion_main,
};

static SOURCE: &str = "
if (x >= 10 && y != 0) { total += values[i++] << 2; } else { flag = !flag || mask ^ 0xFF; }
if (x >= 10 && y != 0) { total += values[i++] << 2; } else { flag = !flag || mask ^ 0xFF; }
if (x >= 10 && y != 0) { total += values[i++] << 2; } else { flag = !flag || mask ^ 0xFF; }
if (x >= 10 && y != 0) { total += values[i++] << 2; } else { flag = !flag || mask ^ 0xFF; }
if (x >= 10 && y != 0) { total += values[i++] << 2; } else { flag = !flag || mask ^ 0xFF; }
if (x >= 10 && y != 0) { total += values[i++] << 2; } else { flag = !flag || mask ^ 0xFF; }
if (x >= 10 && y != 0) { total += values[i++] << 2; } else { flag = !flag || mask ^ 0xFF; }
if (x >= 10 && y != 0) { total += values[i++] << 2; } else { flag = !flag || mask ^ 0xFF; }
if (x >= 10 && y != 0) { total += values[i++] << 2; } else { flag = !flag || mask ^ 0xFF; }
if (x >= 10 && y != 0) { total += values[i++] << 2; } else { flag = !flag || mask ^ 0xFF; }
";

static TRIVIA: &str = "
    // Blink the on-board LED once per second.
    /* pin 13 is wired to the LED on most boards */
    digitalWrite(13, HIGH);   // on
    delay(1_000);             // wait

    // Blink the on-board LED once per second.
    /* pin 13 is wired to the LED on most boards */
    digitalWrite(13, LOW);    // off
    delay(1_000);             // wait
";

static LITERALS: &str = r#"
    Serial.println("temperature: \t\u00B0C\n"); Serial.println(@"C:\logs\boot.txt");
    float ratio = 1.5e-3f; ulong mask = 0b1010_1010UL; char sep = '\'';
    Serial.println("temperature: \t\u00B0C\n"); Serial.println(@"C:\logs\boot.txt");
    float ratio = 1.5e-3f; ulong mask = 0b1010_1010UL; char sep = '\'';
"#;

static CANDIDATES: [(&str, &str); 3] =
    [("keywords_operators_and_punctuation", SOURCE), ("trivia", TRIVIA), ("literals", LITERALS)];

fn iterate(s: &str) {
    use arduify_tokenizer::{SyntaxKind, Tokenizer};

    let mut tokenizer = Tokenizer::new(s);

    loop {
        let token = tokenizer.next_token();

        if token.kind == SyntaxKind::EOF {
            break;
        }

        black_box(token);
    }
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for (name, source) in CANDIDATES {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(name, &source, |b, &s| b.iter(|| iterate(s)));
    }
}

criterion_group!(benches, bench_iterate);
criterion_main!(benches);
