use criterion::{black_box, criterion_group, criterion_main, Criterion};
use statement_core::classify::section_for_account;
use statement_core::config::EngineConfig;
use statement_core::registry::AccountCode;
use statement_core::statement::{GeneratedStatement, LineItem, StatementType, Subtotal};
use statement_core::validate::{ArithmeticValidator, SignValidator};

fn build_sample_statement(item_count: usize) -> GeneratedStatement {
    let mut items = Vec::with_capacity(item_count);
    let mut total = 0.0;
    for idx in 0..item_count {
        let (code, section, amount) = match idx % 3 {
            0 => ("4000", "revenue", 100.0 + (idx % 50) as f64),
            1 => ("5000", "cost_of_sales", -40.0 - (idx % 20) as f64),
            _ => ("5100", "operating_expenses", -10.0),
        };
        total += amount;
        items.push(LineItem::new(
            format!("Item {idx}"),
            AccountCode::new(code).expect("valid code"),
            amount,
            section,
        ));
    }
    let revenue: f64 = items
        .iter()
        .filter(|item| item.section == "revenue")
        .map(|item| item.amount)
        .sum();
    GeneratedStatement::new(items, vec![Subtotal::new("revenue total", revenue)], total)
}

fn bench_statement_validation(c: &mut Criterion) {
    let config = EngineConfig::default();
    let statement = build_sample_statement(black_box(10_000));

    c.bench_function("validate_statement_10k", |b| {
        b.iter(|| {
            let result = ArithmeticValidator::validate_statement(
                &config,
                &statement,
                StatementType::Income,
            );
            black_box(result);
        })
    });

    c.bench_function("sign_check_10k", |b| {
        b.iter(|| {
            for item in &statement.line_items {
                let result = SignValidator::validate_line_item(&config, item);
                black_box(result);
            }
        })
    });
}

fn bench_classification(c: &mut Criterion) {
    let config = EngineConfig::default();
    let chart = config.chart();
    let codes: Vec<AccountCode> = (0..10_000)
        .map(|numeric| AccountCode::new(&format!("{:04}", numeric)).expect("valid code"))
        .collect();

    c.bench_function("classify_full_code_space", |b| {
        b.iter(|| {
            for code in &codes {
                for statement_type in StatementType::ALL {
                    black_box(section_for_account(&chart, code, statement_type));
                }
            }
        })
    });
}

criterion_group!(benches, bench_statement_validation, bench_classification);
criterion_main!(benches);
