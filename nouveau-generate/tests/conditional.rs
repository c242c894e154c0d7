//! Integration tests for Conditional and FinalTurn.

use nouveau_context::{FirstLines, LastLines};
use nouveau_generate::{Conditional, FinalTurn, PromptGenerator};
use nouveau_types::test_utils::EchoService;
use nouveau_types::{Author, GenerateError, Generator, Poem, TextService};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn make_poem(lines: &[&str], max_lines: usize) -> Poem {
    let mut poem = Poem::new(max_lines, "fake", "closure");
    for (i, text) in lines.iter().enumerate() {
        let author = if i % 2 == 0 { Author::Human } else { Author::Ai };
        poem.add_line(*text, author).unwrap();
    }
    poem
}

fn closure() -> impl Generator {
    Conditional::new(
        FinalTurn,
        PromptGenerator::new(FirstLines::new(1)),
        PromptGenerator::new(LastLines::new(1)),
    )
}

/// Counts its invocations and answers with a fixed label.
struct SpyGenerator {
    label: &'static str,
    calls: Arc<AtomicUsize>,
}

impl Generator for SpyGenerator {
    fn generate(&self, _poem: &Poem, _service: &mut dyn TextService) -> Result<String, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.label.to_string())
    }
}

#[test]
fn closure_uses_last_when_not_final() {
    let mut service = EchoService::new();
    let poem = make_poem(&["a", "b", "c", "d"], 6);
    closure().generate(&poem, &mut service).unwrap();
    assert_eq!(service.last_prompt(), Some("d"));
}

#[test]
fn closure_uses_first_on_final_line() {
    let mut service = EchoService::new();
    let poem = make_poem(&["a", "b", "c", "d", "e"], 6);
    closure().generate(&poem, &mut service).unwrap();
    assert_eq!(service.last_prompt(), Some("a"));
}

#[test]
fn closure_two_line_poem() {
    let mut service = EchoService::new();
    let poem = make_poem(&["only"], 2);
    closure().generate(&poem, &mut service).unwrap();
    assert_eq!(service.last_prompt(), Some("only"));
}

#[test]
fn closure_condition_accepts_plain_closures() {
    let mut service = EchoService::new();
    let poem = make_poem(&["a", "b", "c"], 10);

    let always = Conditional::new(
        |_: &Poem| true,
        PromptGenerator::new(FirstLines::new(1)),
        PromptGenerator::new(LastLines::new(1)),
    );
    always.generate(&poem, &mut service).unwrap();
    assert_eq!(service.last_prompt(), Some("a"));

    let never = Conditional::new(
        |_: &Poem| false,
        PromptGenerator::new(FirstLines::new(1)),
        PromptGenerator::new(LastLines::new(1)),
    );
    never.generate(&poem, &mut service).unwrap();
    assert_eq!(service.last_prompt(), Some("c"));
}

#[test]
fn final_turn_routes_exactly_once_in_four_line_session() {
    let true_calls = Arc::new(AtomicUsize::new(0));
    let false_calls = Arc::new(AtomicUsize::new(0));
    let generator = Conditional::new(
        |poem: &Poem| poem.len() == poem.max_lines() - 1,
        SpyGenerator { label: "closing", calls: Arc::clone(&true_calls) },
        SpyGenerator { label: "continuing", calls: Arc::clone(&false_calls) },
    );

    let mut service = EchoService::new();
    let mut poem = Poem::new(4, "fake", "closure");
    let mut routed = Vec::new();
    while !poem.is_full() {
        let line = generator.generate(&poem, &mut service).unwrap();
        routed.push((poem.len(), line.clone()));
        poem.add_line(line, Author::Ai).unwrap();
    }

    assert_eq!(true_calls.load(Ordering::SeqCst), 1);
    assert_eq!(false_calls.load(Ordering::SeqCst), 3);
    assert_eq!(routed[3], (3, "closing".to_string()));
    assert!(routed[..3].iter().all(|(_, line)| line == "continuing"));
    // The spies never touch the service.
    assert!(service.prompts().is_empty());
}

#[test]
fn errors_from_the_chosen_branch_pass_through() {
    let poem = make_poem(&["a"], 4);
    let mut service = nouveau_types::test_utils::FailingService::always();
    let generator = Conditional::new(
        FinalTurn,
        PromptGenerator::new(FirstLines::new(1)),
        PromptGenerator::new(LastLines::new(1)),
    );
    assert!(matches!(
        generator.generate(&poem, &mut service),
        Err(GenerateError::Service(_))
    ));
}
