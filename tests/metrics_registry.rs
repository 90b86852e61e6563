//! Registry behaviour through the public API only.

use sample_app::metrics::Metrics;

#[test]
fn fresh_registry_declares_counter_without_samples() {
    let m = Metrics::new().unwrap();
    let out = m.render().unwrap();

    assert!(out.contains("# TYPE http_requests_total counter"));
    assert!(!out.contains("http_requests_total{"));
}

#[test]
fn increment_creates_then_bumps_label_set() {
    let m = Metrics::new().unwrap();
    m.increment("GET", "/", 200);
    m.increment("GET", "/", 200);
    m.increment("POST", "/", 201);

    let out = m.render().unwrap();
    assert!(out.contains(r#"http_requests_total{method="GET",route="/",status="200"} 2"#));
    assert!(out.contains(r#"http_requests_total{method="POST",route="/",status="201"} 1"#));
    // header must not be duplicated once real samples exist
    assert_eq!(out.matches("# TYPE http_requests_total counter").count(), 1);
}

#[test]
fn render_is_repeatable() {
    let m = Metrics::new().unwrap();
    m.increment("GET", "/error", 500);

    let first = m.render().unwrap();
    let second = m.render().unwrap();
    let line = r#"http_requests_total{method="GET",route="/error",status="500"} 1"#;
    assert!(first.contains(line));
    assert!(second.contains(line));
}

#[test]
fn registries_are_independent() {
    let a = Metrics::new().unwrap();
    let b = Metrics::new().unwrap();
    a.increment("GET", "/", 200);

    assert!(!b.render().unwrap().contains("http_requests_total{"));
}

#[test]
fn increments_from_many_threads_all_land() {
    let m = std::sync::Arc::new(Metrics::new().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let m = m.clone();
            std::thread::spawn(move || {
                for _ in 0..250 {
                    m.increment("GET", "/", 200);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let out = m.render().unwrap();
    assert!(out.contains(r#"http_requests_total{method="GET",route="/",status="200"} 1000"#));
}

#[cfg(target_os = "linux")]
#[test]
fn process_metrics_are_exported() {
    let out = Metrics::new().unwrap().render().unwrap();
    assert!(out.contains("process_resident_memory_bytes"));
}

#[test]
fn content_type_is_text_exposition() {
    let m = Metrics::new().unwrap();
    assert_eq!(m.content_type(), "text/plain; version=0.0.4; charset=utf-8");
}
