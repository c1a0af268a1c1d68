use rmonitorias::config::{Config, QuotaTable};
use rmonitorias::core::eligibility::{ProductSource, project_eligible};
use rmonitorias::core::normalizer::{
    ColumnAliases, Normalized, RejectReason, normalize, normalize_all,
};
use rmonitorias::core::pipeline::{Pipeline, RunStatus, Settings};
use rmonitorias::core::streak::GapRule;
use rmonitorias::models::attendance::Attendance;
use rmonitorias::models::raw_record::RawRecord;
use std::collections::HashSet;

mod common;
use common::{day, march_run, raw_march_run};

fn accepted(n: Normalized) -> Attendance {
    match n {
        Normalized::Accepted(a) => a,
        Normalized::Rejected(r) => panic!("unexpected reject: {r:?}"),
    }
}

#[test]
fn normalizer_reads_alias_variants() {
    let aliases = ColumnAliases::default();

    let row = RawRecord::from_pairs([
        ("analista", "Ana"),
        ("Data", "2024-03-05"),
        ("escala", "Escalado"),
        ("SubOperacao", "ID - N1"),
        ("ProdutoPrincipal", "Check"),
    ]);
    let rec = accepted(normalize(&row, &aliases));

    assert_eq!(rec.analyst, "Ana");
    assert_eq!(rec.date, day(2024, 3, 5));
    assert_eq!(rec.status, "Escalado");
    assert_eq!(rec.team.as_deref(), Some("ID - N1"));
    assert_eq!(rec.product.as_deref(), Some("Check"));

    let accented = RawRecord::from_pairs([
        (" NOME ", "Bea"),
        ("DATA", "05/03/2024"),
        ("SUB OPERAÇÃO", "B2C"),
    ]);
    let rec = accepted(normalize(&accented, &aliases));
    assert_eq!(rec.date, day(2024, 3, 5));
    assert_eq!(rec.team.as_deref(), Some("B2C"));
    assert_eq!(rec.status, "");
    assert_eq!(rec.product, None);
}

#[test]
fn normalizer_rejects_without_aborting() {
    let aliases = ColumnAliases::default();
    let rows = vec![
        RawRecord::from_pairs([("NOME", ""), ("DATA", "01/03/2024")]),
        RawRecord::from_pairs([("NOME", "Ana")]),
        RawRecord::from_pairs([("NOME", "Ana"), ("DATA", "03/01/24")]),
        RawRecord::from_pairs([("NOME", "Ana"), ("DATA", "2024-03-01")]),
    ];

    assert_eq!(
        normalize(&rows[0], &aliases),
        Normalized::Rejected(RejectReason::MissingName)
    );
    assert_eq!(
        normalize(&rows[1], &aliases),
        Normalized::Rejected(RejectReason::MissingDate)
    );
    assert_eq!(
        normalize(&rows[2], &aliases),
        Normalized::Rejected(RejectReason::UnparseableDate("03/01/24".into()))
    );

    let (records, stats) = normalize_all(&rows, &aliases);
    assert_eq!(records.len(), 1);
    assert_eq!(stats.total_rows, 4);
    assert_eq!(stats.accepted, 1);
    assert_eq!(stats.rejected(), 3);
    assert_eq!(stats.unparseable_date, 1);
}

#[test]
fn custom_aliases_are_honoured() {
    let aliases = ColumnAliases {
        name: vec!["Colaborador".into()],
        ..ColumnAliases::default()
    };
    let row = RawRecord::from_pairs([("COLABORADOR", "Ana"), ("DATA", "2024/03/01")]);
    assert_eq!(accepted(normalize(&row, &aliases)).analyst, "Ana");
}

#[test]
fn projector_keeps_the_last_row_per_analyst() {
    let mut records = march_run("Ana", 1, 3, "escalado");
    records[0].team = Some("Auto".into());
    records[1].team = Some("B2C".into());
    records[2].team = Some("SafeDoc".into());
    records.push(Attendance::new("Bea", day(2024, 3, 1), "escalado").with_team("B2C"));

    let eligible: HashSet<String> = ["Ana".to_string()].into_iter().collect();
    let out = project_eligible(&records, &eligible, ProductSource::SubOperation);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].analyst, "Ana");
    assert_eq!(out[0].team.as_deref(), Some("SafeDoc"));
    assert_eq!(out[0].product.as_deref(), Some("Doc"));
}

#[test]
fn projector_result_depends_on_row_order() {
    // same rows, shuffled: last-write-wins picks a different product
    let in_order = vec![
        Attendance::new("Ana", day(2024, 3, 1), "escalado").with_team("Auto"),
        Attendance::new("Ana", day(2024, 3, 2), "escalado").with_team("B2C"),
    ];
    let mut out_of_order = in_order.clone();
    out_of_order.reverse();

    let eligible: HashSet<String> = ["Ana".to_string()].into_iter().collect();
    let a = project_eligible(&in_order, &eligible, ProductSource::SubOperation);
    let b = project_eligible(&out_of_order, &eligible, ProductSource::SubOperation);

    assert_eq!(a[0].product.as_deref(), Some("B2C"));
    assert_eq!(b[0].product.as_deref(), Some("Auto"));
}

#[test]
fn projector_keeps_analysts_with_unmapped_teams() {
    let records = vec![
        Attendance::new("Ana", day(2024, 3, 1), "escalado").with_team("Backoffice"),
        Attendance::new("Bea", day(2024, 3, 1), "escalado"),
    ];
    let eligible: HashSet<String> = ["Ana".to_string(), "Bea".to_string()].into_iter().collect();

    let out = project_eligible(&records, &eligible, ProductSource::SubOperation);
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|e| e.product.is_none()));
}

#[test]
fn product_column_source_uses_the_raw_label() {
    let records = vec![
        Attendance::new("Ana", day(2024, 3, 1), "escalado")
            .with_team("Backoffice")
            .with_product("ID Pay"),
    ];
    let eligible: HashSet<String> = ["Ana".to_string()].into_iter().collect();

    let out = project_eligible(&records, &eligible, ProductSource::ProductColumn);
    assert_eq!(out[0].product.as_deref(), Some("ID Pay"));
}

#[test]
fn full_run_allocates_auto_quota() {
    let mut rows = raw_march_run("Ana", 1, 11, "Monitoria Auto");
    rows.extend(raw_march_run("Bea", 1, 12, "Auto Noturno"));
    rows.extend(raw_march_run("Caio", 1, 15, "AUTO"));
    rows.extend(raw_march_run("Duda", 1, 5, "AUTO"));

    let run = Pipeline::run(&rows, &Settings::default());

    assert_eq!(run.status(), RunStatus::Allocated);
    assert_eq!(run.streaks.len(), 3);
    let counts: Vec<(&str, u32)> = run
        .allocation
        .records
        .iter()
        .map(|r| (r.analyst.as_str(), r.assigned))
        .collect();
    assert_eq!(counts, vec![("Ana", 7), ("Bea", 7), ("Caio", 6)]);
    assert!(run.allocation.unallocated.iter().any(|u| u.product == "Check"));
}

#[test]
fn full_run_is_idempotent() {
    let mut rows = raw_march_run("Ana", 1, 14, "ID - N1");
    rows.extend(raw_march_run("Bea", 2, 13, "ID - N2"));
    rows.extend(raw_march_run("Caio", 1, 20, "b2c"));
    let settings = Settings::default();

    let first = Pipeline::run(&rows, &settings);
    let second = Pipeline::run(&rows, &settings);

    assert_eq!(first.streaks, second.streaks);
    assert_eq!(first.allocation, second.allocation);
    assert_eq!(first.allocation.assigned_for("Check"), 640);
    assert_eq!(first.allocation.assigned_for("B2C"), 30);
}

#[test]
fn statuses_for_nothing_to_allocate() {
    let settings = Settings::default();

    let empty = Pipeline::run(&[], &settings);
    assert_eq!(empty.status(), RunStatus::EmptyInput);

    let short = Pipeline::run(&raw_march_run("Ana", 1, 5, "Auto"), &settings);
    assert_eq!(short.status(), RunStatus::NoEligibleAnalysts);

    let unmapped = Pipeline::run(&raw_march_run("Ana", 1, 11, "Backoffice"), &settings);
    assert_eq!(unmapped.status(), RunStatus::NothingAllocated);
    assert_eq!(unmapped.eligible.len(), 1);
    assert!(unmapped.eligible[0].product.is_none());
}

#[test]
fn settings_follow_config() {
    let mut cfg = Config::default();
    cfg.gap_rule = GapRule::BusinessWeek;
    cfg.quotas = QuotaTable::from_pairs([("Auto", 3)]);
    cfg.keep_zero_allocations = true;

    let settings = Settings::from_config(&cfg);
    assert_eq!(settings.gap_rule, GapRule::BusinessWeek);
    assert!(settings.allocation.keep_zero);

    let mut rows = Vec::new();
    for name in ["A", "B", "C", "D"] {
        rows.extend(raw_march_run(name, 1, 11, "auto"));
    }
    let run = Pipeline::run(&rows, &settings);
    assert_eq!(run.allocation.records.len(), 4);
    assert_eq!(run.allocation.records[3].assigned, 0);
    assert_eq!(run.allocation.assigned_for("Auto"), 3);
}

#[test]
fn config_round_trips_through_yaml_and_reports_problems() {
    let cfg = Config::default();
    let yaml = cfg.to_yaml().unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), cfg);
    assert!(cfg.check().is_empty());

    let partial = Config::from_yaml("attendance_policy: inclusion\nworked_token: ''\n").unwrap();
    assert_eq!(partial.quotas, QuotaTable::default());
    let warnings = partial.check();
    assert!(warnings.iter().any(|w| w.contains("worked_token")));

    let skewed = Config::from_yaml("quotas:\n  - product: Auto\n    quota: 5\n").unwrap();
    assert!(skewed.check().iter().any(|w| w.contains("total_monitorias")));

    let huge = Config::from_yaml(
        "total_monitorias: 4000000000\nquotas:\n  - product: A\n    quota: 3000000000\n  - product: B\n    quota: 3000000000\n",
    )
    .unwrap();
    assert_eq!(huge.quotas.total(), 6_000_000_000);
    assert!(
        huge.check()
            .iter()
            .any(|w| w.contains("sums to 6000000000 but total_monitorias is 4000000000"))
    );

    assert!(Config::from_yaml("gap_rule: weekly\n").is_err());
    assert_eq!(Config::from_yaml("").unwrap(), Config::default());
}
