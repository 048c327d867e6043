use std::sync::Mutex;

use anyhow::Result;
use quiz_auto_answer::dom::{LivePageDom, RawOptionRow, RawQuestionBlock};
use quiz_auto_answer::error::ResolveError;
use quiz_auto_answer::models::{AnswerEntry, AnswerSet, ApplyOutcomeKind};
use quiz_auto_answer::utils::logging;
use quiz_auto_answer::{
    connect_to_quiz_page, AnswerResolver, Config, ControlActivator, ControlRef, JsExecutor,
    QuizSnapshot, RunController, RunOutcome, RunState,
};

/// 按脚本返回答案的解析器，同时记录收到的快照形状
struct ScriptedResolver {
    answers: AnswerSet,
    seen_questions: Mutex<Vec<(u32, String, usize)>>,
}

impl ScriptedResolver {
    fn new(answers: AnswerSet) -> Self {
        Self {
            answers,
            seen_questions: Mutex::new(Vec::new()),
        }
    }
}

impl AnswerResolver for ScriptedResolver {
    async fn resolve(&self, snapshot: &QuizSnapshot) -> Result<AnswerSet, ResolveError> {
        let mut seen = self.seen_questions.lock().unwrap();
        for q in snapshot.questions() {
            seen.push((q.id, q.text.clone(), q.options.len()));
        }
        Ok(self.answers.clone())
    }
}

#[derive(Default)]
struct RecordingActivator {
    activated: Mutex<Vec<String>>,
}

impl ControlActivator for RecordingActivator {
    async fn activate(&self, control: &ControlRef) -> Result<()> {
        self.activated
            .lock()
            .unwrap()
            .push(control.as_str().to_string());
        Ok(())
    }
}

fn entry(id: u32, answer: &str) -> AnswerEntry {
    AnswerEntry {
        id,
        answer: answer.to_string(),
    }
}

/// 模拟一张真实的 quiz attempt 页面快照：
/// 一道普通选择题、一个空区块、一道判断题（只有 label）、
/// 一道有选项但缺控件的题
fn sample_page() -> LivePageDom {
    LivePageDom::from_blocks(vec![
        RawQuestionBlock {
            question_html: "<p>Tom &amp; Jerry 是什么关系？</p>".to_string(),
            rows: vec![
                RawOptionRow {
                    option_html: "<p>&quot;朋友&quot;</p>".to_string(),
                    label_text: None,
                    control_key: Some("qaa-0-0".to_string()),
                },
                RawOptionRow {
                    option_html: "<p>对手</p>".to_string(),
                    label_text: None,
                    control_key: Some("qaa-0-1".to_string()),
                },
            ],
        },
        // 空题干区块：被跳过且不占题号
        RawQuestionBlock {
            question_html: "  ".to_string(),
            rows: vec![],
        },
        RawQuestionBlock {
            question_html: "<p>地球是平的。</p>".to_string(),
            rows: vec![
                RawOptionRow {
                    option_html: String::new(),
                    label_text: Some("True".to_string()),
                    control_key: Some("qaa-2-0".to_string()),
                },
                RawOptionRow {
                    option_html: String::new(),
                    label_text: Some("False".to_string()),
                    control_key: Some("qaa-2-1".to_string()),
                },
            ],
        },
        RawQuestionBlock {
            question_html: "<p>缺控件的题</p>".to_string(),
            rows: vec![RawOptionRow {
                option_html: "<p>唯一选项</p>".to_string(),
                label_text: None,
                control_key: None,
            }],
        },
    ])
}

#[tokio::test]
async fn test_full_pipeline_extract_resolve_apply() {
    let dom = sample_page();
    let resolver = ScriptedResolver::new(vec![
        entry(1, "b"),
        entry(2, "B"),
        entry(3, "A"),
        entry(9, "A"),
    ]);
    let activator = RecordingActivator::default();
    let mut controller = RunController::new();

    let outcome = controller.run(&dom, &resolver, &activator).await.unwrap();
    assert_eq!(controller.state(), RunState::Done);

    // 解析服务收到的快照：空区块被排除，题号连续，文本已解码
    let seen = resolver.seen_questions.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![
            (1, "Tom & Jerry 是什么关系？".to_string(), 2),
            (2, "地球是平的。".to_string(), 2),
            (3, "缺控件的题".to_string(), 1),
        ]
    );

    // 作答：题 1 选 B（小写字母也一样），题 2 选 B，
    // 题 3 的选项没有控件，题 9 不存在
    let clicked = activator.activated.lock().unwrap().clone();
    assert_eq!(clicked, vec!["qaa-0-1", "qaa-2-1"]);

    let report = match outcome {
        RunOutcome::Applied(report) => report,
        other => panic!("期望 Applied，实际: {:?}", other),
    };
    let kinds: Vec<ApplyOutcomeKind> = report.outcomes().iter().map(|o| o.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ApplyOutcomeKind::Applied,
            ApplyOutcomeKind::Applied,
            ApplyOutcomeKind::UnresolvedControl,
            ApplyOutcomeKind::UnmatchedQuestion,
        ]
    );
}

#[tokio::test]
async fn test_pipeline_rerun_is_ignored() {
    let dom = sample_page();
    let resolver = ScriptedResolver::new(vec![entry(1, "A")]);
    let activator = RecordingActivator::default();
    let mut controller = RunController::new();

    let first = controller.run(&dom, &resolver, &activator).await.unwrap();
    assert!(matches!(first, RunOutcome::Applied(_)));

    // 第二次触发：不提取、不解析、不作答
    let second = controller.run(&dom, &resolver, &activator).await.unwrap();
    assert!(matches!(second, RunOutcome::AlreadyRan));
    assert_eq!(activator.activated.lock().unwrap().len(), 1);
    assert_eq!(resolver.seen_questions.lock().unwrap().len(), 3);
}

// ========== 以下测试需要真实浏览器环境，默认忽略 ==========
// 运行方式：先用 --remote-debugging-port 启动浏览器并打开测验页面，
// 再 cargo test -- --ignored

#[tokio::test]
#[ignore]
async fn test_browser_connection() {
    logging::init(true);
    let config = Config::from_env();

    let result =
        connect_to_quiz_page(config.browser_debug_port, &config.quiz_url_fragment).await;

    assert!(result.is_ok(), "应该能够连接浏览器并找到测验页面");
}

#[tokio::test]
#[ignore]
async fn test_live_page_capture() {
    logging::init(true);
    let config = Config::from_env();

    let (_browser, page) =
        connect_to_quiz_page(config.browser_debug_port, &config.quiz_url_fragment)
            .await
            .expect("连接浏览器失败");

    let executor = JsExecutor::new(page);
    let dom = LivePageDom::capture(&executor).await.expect("页面快照失败");

    let snapshot = quiz_auto_answer::extract(&dom);
    println!("提取到 {} 道题", snapshot.len());
    logging::log_snapshot_summary(&snapshot);
}
