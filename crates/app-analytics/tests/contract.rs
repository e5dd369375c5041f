//! Call-contract tests against an in-process native module.

use app_analytics::{analytics, Analytics, App, Error, NativeCall, NativeModule};
use async_trait::async_trait;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Semaphore;

/// Records calls and holds each one until a permit is released.
struct GatedModule {
    calls: Mutex<Vec<NativeCall>>,
    permits: Semaphore,
    fail_with: Option<(String, String)>,
}

impl GatedModule {
    fn open() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            permits: Semaphore::new(Semaphore::MAX_PERMITS),
            fail_with: None,
        }
    }

    fn closed() -> Self {
        Self {
            permits: Semaphore::new(0),
            ..Self::open()
        }
    }

    fn failing(code: &str, message: &str) -> Self {
        Self {
            fail_with: Some((code.into(), message.into())),
            ..Self::open()
        }
    }

    fn calls(&self) -> Vec<NativeCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NativeModule for GatedModule {
    async fn invoke(&self, call: NativeCall) -> Result<(), Error> {
        self.calls.lock().unwrap().push(call);
        self.permits.acquire().await.unwrap().forget();

        match &self.fail_with {
            Some((code, message)) => Err(Error::native(code.clone(), message.clone())),
            None => Ok(()),
        }
    }
}

type Pending = Pin<Box<dyn Future<Output = Result<(), Error>> + Send>>;
type Call = fn(Analytics) -> Pending;

fn log_event(a: Analytics) -> Pending {
    Box::pin(async move {
        a.log_event("test", HashMap::from([("key".into(), "value".into())]))
            .await
    })
}

fn set_analytics_collection_enabled(a: Analytics) -> Pending {
    Box::pin(async move { a.set_analytics_collection_enabled(true).await })
}

fn set_current_screen(a: Analytics) -> Pending {
    Box::pin(async move { a.set_current_screen("Product", None).await })
}

fn set_minimum_session_duration(a: Analytics) -> Pending {
    Box::pin(async move { a.set_minimum_session_duration(10_000).await })
}

fn set_session_timeout_duration(a: Analytics) -> Pending {
    Box::pin(async move { a.set_session_timeout_duration(1_800_000).await })
}

fn set_user_id(a: Analytics) -> Pending {
    Box::pin(async move { a.set_user_id(None).await })
}

fn set_user_property(a: Analytics) -> Pending {
    Box::pin(async move { a.set_user_property("plan", None).await })
}

fn set_user_properties(a: Analytics) -> Pending {
    Box::pin(async move {
        a.set_user_properties(HashMap::from([("plan".into(), None)]))
            .await
    })
}

fn reset_analytics_data(a: Analytics) -> Pending {
    Box::pin(async move { a.reset_analytics_data().await })
}

fn all_operations() -> Vec<(&'static str, Call)> {
    vec![
        ("logEvent", log_event as Call),
        ("setAnalyticsCollectionEnabled", set_analytics_collection_enabled),
        ("setCurrentScreen", set_current_screen),
        ("setMinimumSessionDuration", set_minimum_session_duration),
        ("setSessionTimeoutDuration", set_session_timeout_duration),
        ("setUserId", set_user_id),
        ("setUserProperty", set_user_property),
        ("setUserProperties", set_user_properties),
        ("resetAnalyticsData", reset_analytics_data),
    ]
}

#[tokio::test]
async fn test_every_operation_waits_for_native_completion() {
    for (method, call) in all_operations() {
        let module = Arc::new(GatedModule::closed());
        let app = App::builder_shared(module.clone()).build().unwrap();
        let analytics = analytics(&app).unwrap();

        let handle = tokio::spawn(call(analytics));
        tokio::time::sleep(Duration::from_millis(20)).await;

        // Forwarded, but not complete until the native layer answers
        assert!(!handle.is_finished(), "{} completed early", method);
        let calls = module.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method(), method);

        module.permits.add_permits(1);
        handle.await.unwrap().unwrap();
    }
}

#[tokio::test]
async fn test_clearing_values_are_forwarded() {
    let module = Arc::new(GatedModule::open());
    let analytics = App::builder_shared(module.clone())
        .build()
        .unwrap()
        .analytics()
        .unwrap();

    analytics.set_user_id(None).await.unwrap();
    analytics.set_user_property("plan", None).await.unwrap();
    analytics
        .set_user_properties(HashMap::from([("plan".into(), None)]))
        .await
        .unwrap();

    assert_eq!(
        module.calls(),
        vec![
            NativeCall::SetUserId { id: None },
            NativeCall::SetUserProperty {
                name: "plan".into(),
                value: None,
            },
            NativeCall::SetUserProperties {
                properties: HashMap::from([("plan".into(), None)]),
            },
        ]
    );
}

#[tokio::test]
async fn test_native_error_surfaces_unchanged() {
    let module = Arc::new(GatedModule::failing("analytics/reserved-name", "reserved"));
    let analytics = App::builder_shared(module.clone())
        .build()
        .unwrap()
        .analytics()
        .unwrap();

    let result = analytics.log_event("session_start", HashMap::new()).await;

    match result {
        Err(Error::Native { code, message }) => {
            assert_eq!(code, "analytics/reserved-name");
            assert_eq!(message, "reserved");
        }
        other => panic!("expected native error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_concurrent_calls() {
    let module = Arc::new(GatedModule::open());
    let analytics = App::builder_shared(module.clone())
        .build()
        .unwrap()
        .analytics()
        .unwrap();

    let mut handles = vec![];
    for i in 0..50 {
        let a = analytics.clone();
        handles.push(tokio::spawn(async move {
            a.log_event(format!("event_{}", i), HashMap::new()).await
        }));
    }

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(module.calls().len(), 50);
}

#[test]
fn test_secondary_app_rejected() {
    let app = App::builder(GatedModule::open())
        .name("secondary")
        .build()
        .unwrap();

    assert!(matches!(analytics(&app), Err(Error::UnsupportedApp(_))));
}
