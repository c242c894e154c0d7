//! Integration tests for PromptGenerator.

use nouveau_context::{FirstLines, LastLines, LastWords, LineWindow};
use nouveau_generate::{GenerationConfig, PromptGenerator};
use nouveau_types::test_utils::{EchoService, FailingService, ScriptedService};
use nouveau_types::{Author, GenerateError, Generator, LineSelector, Poem, ServiceError};

fn make_poem(lines: &[&str]) -> Poem {
    let mut poem = Poem::new(10, "fake", "last");
    for (i, text) in lines.iter().enumerate() {
        let author = if i % 2 == 0 { Author::Human } else { Author::Ai };
        poem.add_line(*text, author).unwrap();
    }
    poem
}

#[test]
fn last_uses_final_line() {
    let mut service = EchoService::new();
    let poem = make_poem(&["first", "second", "third"]);
    let line = PromptGenerator::new(LastLines::new(1))
        .generate(&poem, &mut service)
        .unwrap();
    assert_eq!(service.last_prompt(), Some("third"));
    assert_eq!(line, "[third]");
}

#[test]
fn first_uses_opening_line() {
    let mut service = EchoService::new();
    let poem = make_poem(&["opening", "b", "c"]);
    let line = PromptGenerator::new(FirstLines::new(1))
        .generate(&poem, &mut service)
        .unwrap();
    assert_eq!(service.last_prompt(), Some("opening"));
    assert_eq!(line, "[opening]");
}

#[test]
fn window_prompt_is_newline_joined() {
    let mut service = EchoService::new();
    let poem = make_poem(&["x", "y", "z"]);
    let line = PromptGenerator::new(LastLines::new(3))
        .generate(&poem, &mut service)
        .unwrap();
    assert_eq!(line, "[x\ny\nz]");
}

#[test]
fn word_window_prompt() {
    let mut service = EchoService::new();
    let poem = make_poem(&["the rain falls", "soft on the ground"]);
    PromptGenerator::new(LastWords::new(4))
        .generate(&poem, &mut service)
        .unwrap();
    assert_eq!(service.last_prompt(), Some("soft on the ground"));
}

#[test]
fn returns_service_output_unmodified() {
    let mut service = ScriptedService::new(["  spaced out \n"]);
    let poem = make_poem(&["a"]);
    let line = PromptGenerator::new(LastLines::new(1))
        .generate(&poem, &mut service)
        .unwrap();
    assert_eq!(line, "  spaced out \n");
}

#[test]
fn passes_configured_token_budget() {
    let mut service = ScriptedService::new(["out"]);
    let poem = make_poem(&["a"]);
    PromptGenerator::new(LastLines::new(1))
        .generate(&poem, &mut service)
        .unwrap();
    PromptGenerator::with_config(LastLines::new(1), GenerationConfig { max_new_tokens: 64 })
        .generate(&poem, &mut service)
        .unwrap();
    let budgets: Vec<u32> = service.calls().iter().map(|c| c.max_new_tokens).collect();
    assert_eq!(budgets, vec![20, 64]);
}

#[test]
fn service_failure_propagates_unchanged() {
    let mut service = FailingService::always();
    let poem = make_poem(&["a"]);
    let err = PromptGenerator::new(LastLines::new(1))
        .generate(&poem, &mut service)
        .unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Service(ServiceError::Unavailable(ref msg)) if msg == "backend offline"
    ));
    assert_eq!(service.call_count(), 1);
}

#[test]
fn context_failure_stops_before_service_call() {
    let mut service = ScriptedService::new(["never"]);
    let poem = make_poem(&["a", "b"]);
    let generator =
        PromptGenerator::new(LineWindow::new(LineSelector::indices(vec![0, 7]).unwrap()).unwrap());
    let err = generator.generate(&poem, &mut service).unwrap_err();
    assert!(matches!(err, GenerateError::Context(_)));
    assert_eq!(service.call_count(), 0);
}

#[test]
fn empty_poem_prompts_with_empty_string() {
    let mut service = ScriptedService::new(["seed"]);
    let poem = make_poem(&[]);
    let line = PromptGenerator::new(LastLines::new(1))
        .generate(&poem, &mut service)
        .unwrap();
    assert_eq!(line, "seed");
    assert_eq!(service.calls()[0].prompt, "");
}
