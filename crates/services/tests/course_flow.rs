use std::sync::{Arc, Mutex};

use quest_core::geometry::{Point, Rect};
use quest_core::model::{GameSettings, OptionId, QuestionBank, QuestionDraft};
use quest_core::session::GameEvent;
use quest_core::time::fixed_clock;
use services::{DropTarget, EventDispatcher, EventSink, GameLoopService, SinkError};

struct FixedTarget(Rect);

impl DropTarget for FixedTarget {
    fn bounds(&self) -> Rect {
        self.0
    }
}

#[derive(Default)]
struct RecordingSink {
    seen: Mutex<Vec<GameEvent>>,
}

impl RecordingSink {
    fn seen(&self) -> Vec<GameEvent> {
        self.seen.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn name(&self) -> &str {
        "recording"
    }

    fn handle(&self, event: &GameEvent) -> Result<(), SinkError> {
        self.seen.lock().unwrap().push(event.clone());
        Ok(())
    }
}

fn three_question_bank() -> QuestionBank {
    let json = r#"[
      {
        "id": "q1", "title": "One", "prompt": "First.",
        "scenarioType": "internet-outbound",
        "sourceLabel": "Private VM", "destLabel": "Internet",
        "difficulty": "beginner",
        "options": [
          { "id": "nat", "label": "NAT Gateway", "iconType": "nat", "correct": true, "explanation": "yes" },
          { "id": "igw", "label": "Internet Gateway", "iconType": "gateway", "correct": false, "explanation": "no" }
        ]
      },
      {
        "id": "q2", "title": "Two", "prompt": "Second.",
        "scenarioType": "internet-inbound",
        "sourceLabel": "Web Server", "destLabel": "Internet",
        "difficulty": "beginner",
        "options": [
          { "id": "igw", "label": "Internet Gateway", "iconType": "gateway", "correct": true, "explanation": "yes" },
          { "id": "nat", "label": "NAT Gateway", "iconType": "nat", "correct": false, "explanation": "no" }
        ]
      },
      {
        "id": "q3", "title": "Three", "prompt": "Third.",
        "scenarioType": "load-balancing",
        "sourceLabel": "Users", "destLabel": "Web Servers",
        "difficulty": "intermediate",
        "options": [
          { "id": "alb", "label": "Load Balancer", "iconType": "balancer", "correct": true, "explanation": "yes" },
          { "id": "peering", "label": "VPC Peering", "iconType": "peering", "correct": false, "explanation": "no" }
        ]
      }
    ]"#;
    let drafts: Vec<QuestionDraft> = serde_json::from_str(json).unwrap();
    QuestionBank::from_drafts(drafts).unwrap()
}

fn service_with_sink() -> (GameLoopService, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let service = GameLoopService::new(
        fixed_clock(),
        GameSettings::default_arcade(),
        Arc::new(FixedTarget(Rect::new(400.0, 300.0, 600.0, 500.0))),
        EventDispatcher::new().with_sink(sink.clone()),
    );
    (service, sink)
}

const ON_TARGET: Point = Point { x: 500.0, y: 400.0 };

#[test]
fn two_correct_then_one_wrong_matches_expected_scoring() {
    let (svc, _sink) = service_with_sink();
    let mut session = svc.start_session(three_question_bank());

    svc.handle_drop(&mut session, &OptionId::new("nat"), ON_TARGET)
        .unwrap();
    svc.advance(&mut session).unwrap();
    svc.handle_drop(&mut session, &OptionId::new("igw"), ON_TARGET)
        .unwrap();
    svc.advance(&mut session).unwrap();

    // 10 for the first answer, 10 + 5 streak bonus for the second.
    assert_eq!(session.score(), 25);
    assert_eq!(session.streak(), 2);
    assert_eq!(session.current_index(), 2);

    svc.handle_drop(&mut session, &OptionId::new("peering"), ON_TARGET)
        .unwrap();

    assert_eq!(session.streak(), 0);
    assert_eq!(session.score(), 25);
    assert!(session.is_error_modal_open());
    assert_eq!(
        session.last_incorrect().unwrap().id(),
        &OptionId::new("peering")
    );
}

#[test]
fn full_run_emits_one_completion_with_pre_reset_score() {
    let (svc, sink) = service_with_sink();
    let mut session = svc.start_session(three_question_bank());

    for id in ["nat", "igw", "alb"] {
        svc.handle_drop(&mut session, &OptionId::new(id), ON_TARGET)
            .unwrap();
        svc.advance(&mut session).unwrap();
    }

    let events = sink.seen();
    let completions: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::CourseCompleted { summary } => Some(summary),
            _ => None,
        })
        .collect();
    assert_eq!(completions.len(), 1);
    // 10 + 15 + 20 with an unbroken streak.
    assert_eq!(completions[0].final_score(), 45);
    assert_eq!(completions[0].questions(), 3);
    assert_eq!(completions[0].incorrect_attempts(), 0);

    // The session looped back to a fresh course.
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.score(), 0);
    assert_eq!(session.streak(), 0);
    assert!(!session.is_level_complete());
}

#[test]
fn single_question_course_completes_with_base_score() {
    let json = r#"[
      {
        "id": "only", "title": "Only", "prompt": "One and done.",
        "scenarioType": "vpn",
        "sourceLabel": "Office", "destLabel": "VPC",
        "difficulty": "beginner",
        "options": [
          { "id": "vgw", "label": "Virtual Private Gateway", "iconType": "vpn", "correct": true, "explanation": "yes" },
          { "id": "nat", "label": "NAT Gateway", "iconType": "nat", "correct": false, "explanation": "no" }
        ]
      }
    ]"#;
    let drafts: Vec<QuestionDraft> = serde_json::from_str(json).unwrap();
    let bank = QuestionBank::from_drafts(drafts).unwrap();

    let (svc, sink) = service_with_sink();
    let mut session = svc.start_session(bank);

    svc.handle_drop(&mut session, &OptionId::new("vgw"), ON_TARGET)
        .unwrap();
    let event = svc.advance(&mut session).unwrap().unwrap();

    let GameEvent::CourseCompleted { summary } = event else {
        panic!("expected completion, got {event:?}");
    };
    assert_eq!(summary.final_score(), 10);
    assert_eq!(session.score(), 0);
    assert_eq!(sink.seen().len(), 2);
}

#[test]
fn wrong_answer_flow_dismisses_and_retries() {
    let (svc, sink) = service_with_sink();
    let mut session = svc.start_session(three_question_bank());

    svc.handle_drop(&mut session, &OptionId::new("igw"), ON_TARGET)
        .unwrap();
    assert!(session.is_error_modal_open());
    assert_eq!(session.incorrect_attempts(), 1);

    svc.dismiss_error(&mut session);
    svc.dismiss_error(&mut session);
    assert!(!session.is_error_modal_open());

    svc.handle_drop(&mut session, &OptionId::new("nat"), ON_TARGET)
        .unwrap();
    assert!(session.is_level_complete());
    // Streak bonus was forfeited by the miss; base points only.
    assert_eq!(session.score(), 10);

    let events = sink.seen();
    assert!(matches!(events[0], GameEvent::AnswerIncorrect { .. }));
    assert!(matches!(events[1], GameEvent::AnswerCorrect { .. }));
}

#[test]
fn missed_drop_emits_nothing_and_scores_nothing() {
    let (svc, sink) = service_with_sink();
    let mut session = svc.start_session(three_question_bank());

    let report = svc
        .handle_drop(&mut session, &OptionId::new("nat"), Point::new(0.0, 0.0))
        .unwrap();

    assert!(!report.accepted);
    assert!(sink.seen().is_empty());
    assert_eq!(session.score(), 0);
    assert!(!session.is_level_complete());
}
