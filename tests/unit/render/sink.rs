use super::*;
use crate::render::scene::render;
use crate::scene::config::SceneConfig;
use crate::scene::model::CodeBlockConfig;

fn state() -> VisualState {
    render(FrameIndex(0), &SceneConfig::CodeBlock(CodeBlockConfig::new("x"))).unwrap()
}

#[test]
fn jsonl_writes_one_object_per_line() {
    let s = state();
    let mut sink = JsonlSink::new(Vec::<u8>::new());
    sink.begin(SinkConfig {
        fps: Fps::default(),
        frames: 2,
    })
    .unwrap();
    sink.push_frame(FrameIndex(0), 0xab, &s).unwrap();
    sink.push_frame(FrameIndex(1), 0xab, &s).unwrap();
    sink.end().unwrap();

    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    let v: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(v["frame"], 1);
    assert_eq!(v["fingerprint"], "00000000000000ab");
    assert_eq!(v["state"]["kind"], "code_block");
}

#[test]
fn in_memory_sink_resets_on_begin() {
    let s = state();
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        fps: Fps::default(),
        frames: 1,
    };
    sink.begin(cfg).unwrap();
    sink.push_frame(FrameIndex(0), 1, &s).unwrap();
    sink.end().unwrap();
    assert!(sink.is_finished());
    assert_eq!(sink.frames().len(), 1);

    sink.begin(cfg).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.is_finished());
    assert_eq!(sink.config(), Some(cfg));
}
