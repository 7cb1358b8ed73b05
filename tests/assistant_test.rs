//! Assistant-facing flow: corpus loading, session caching, prompt
//! construction, reply normalization, and audit logging.

mod common;

use common::{docx_bytes, heading, para, table};
use labdoc::audit::{session_id, AuditEntry, AuditSink, JsonlAuditSink};
use labdoc::chat::{collect_reply, ChatClient, ChunkStream};
use labdoc::{Corpus, Message, PromptBuilder, QueryKind, Result, Session};
use std::fs;

fn write_department(dir: &std::path::Path, file: &str, title: &str) {
    let body = [
        heading(title),
        para("Protocols follow."),
        table(&[&["Test", "Specimen"], &["Glucose", "Plasma"]]),
    ]
    .join("");
    fs::write(dir.join(file), docx_bytes(&body)).unwrap();
}

#[test]
fn corpus_verifies_and_loads_all() {
    let dir = tempfile::tempdir().unwrap();
    write_department(dir.path(), "chemical_pathology.docx", "Chemical Pathology");
    write_department(dir.path(), "immunology.docx", "Immunology");

    let corpus = Corpus::new(dir.path())
        .register("Chemical Pathology", "chemical_pathology.docx")
        .register("Immunology", "immunology.docx");

    assert!(corpus.verify().is_ok());
    let docs = corpus.load_all().unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs["Immunology"].sections[0].title, "Immunology");
}

#[test]
fn corpus_load_all_fails_fast_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    write_department(dir.path(), "present.docx", "Present");

    let corpus = Corpus::new(dir.path())
        .register("Present", "present.docx")
        .register("Absent", "absent.docx");

    assert!(corpus.load_all().is_err());
}

#[test]
fn session_caches_structuring_across_queries() {
    let dir = tempfile::tempdir().unwrap();
    write_department(dir.path(), "haematology.docx", "Haematology");
    let corpus = Corpus::new(dir.path()).register("Haematology", "haematology.docx");

    let mut session = Session::new();
    session.select("Haematology");

    let first = session
        .get_or_structure("Haematology", || corpus.load("Haematology"))
        .unwrap();

    // Second access must come from the cache: the loader would fail now.
    fs::remove_file(dir.path().join("haematology.docx")).unwrap();
    let second = session
        .get_or_structure("Haematology", || corpus.load("Haematology"))
        .unwrap();

    assert_eq!(*first, *second);
}

struct ScriptedClient(Vec<&'static str>);

impl ChatClient for ScriptedClient {
    fn stream(&mut self, _query: &str) -> Result<ChunkStream> {
        let chunks: Vec<String> = self.0.drain(..).map(String::from).collect();
        Ok(Box::new(chunks.into_iter().map(Ok)))
    }
}

#[test]
fn full_exchange_with_audit_trail() {
    let dir = tempfile::tempdir().unwrap();
    write_department(dir.path(), "chem.docx", "Chemical Pathology");
    let corpus = Corpus::new(dir.path()).register("Chemical Pathology", "chem.docx");

    let mut session = Session::new();
    session.select("Chemical Pathology");
    let doc = session
        .get_or_structure("Chemical Pathology", || corpus.load("Chemical Pathology"))
        .unwrap();

    let builder = PromptBuilder::new();
    let system = builder.system_prompt("Chemical Pathology", &doc);
    assert!(system.contains("| Glucose | Plasma |"));

    let question = "What specimen does the glucose test need?";
    assert_eq!(QueryKind::classify(question), QueryKind::TestParameters);
    session.push_message(Message::user(question));

    // Model misbehaves and streams JSON; normalization flattens it.
    let mut client = ScriptedClient(vec![r#"{"Test Name": "Glucose", "#, r#""Specimen": "Plasma"}"#]);
    let stream = client.stream(&builder.user_query("Chemical Pathology", question)).unwrap();
    let reply = collect_reply(stream).unwrap();
    assert_eq!(reply, "**Test Name:** Glucose\n**Specimen:** Plasma");
    session.push_message(Message::assistant(reply.clone()));

    let log_path = dir.path().join("audit_log.jsonl");
    let mut sink = JsonlAuditSink::new(&log_path);
    let entry = AuditEntry::new(
        session_id("seed"),
        "Chemical Pathology",
        question,
        reply,
    );
    assert!(entry.compliance_check);
    sink.record(&entry).unwrap();

    let logged: AuditEntry =
        serde_json::from_str(fs::read_to_string(&log_path).unwrap().lines().next().unwrap())
            .unwrap();
    assert_eq!(logged, entry);
    assert_eq!(session.history().len(), 2);
}
