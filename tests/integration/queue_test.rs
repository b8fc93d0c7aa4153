//! SQS integration tests using LocalStack.
//!
//! These tests verify queue URL resolution, the send paths, the receive
//! loop, and purge against a real SQS implementation.

use std::time::Duration;

use qm_provision::StaticOutputs;
use qm_queue::{
    OutboundPayload, QueueConfig, QueueLocator, ReceiveEvent, ReceiveOptions, SqsQueue,
    batch_bodies, create_sqs_client, receive_up_to, resolve_queue_url,
};

use crate::common::LocalStackTestContext;

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_send_and_receive_round_trip() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let queue_url = ctx.create_queue("qm-send-queue").await.unwrap();
    ctx.purge_queue(&queue_url).await.ok();

    // Client built the way the tool builds it
    let config = QueueConfig::new()
        .with_region(&ctx.region)
        .with_endpoint(&ctx.endpoint);
    let client = create_sqs_client(&config).await.unwrap();
    let queue = SqsQueue::new(client, &queue_url);

    let payload = OutboundPayload::new("integration hello", 1_700_000_000);
    let body = queue.send(&payload, "test").await.unwrap();
    assert_eq!(body, r#"{"msg":"integration hello","ts":1700000000}"#);

    let received = ctx.receive_messages(&queue_url, 10).await.unwrap();
    assert_eq!(received, vec![body]);

    let parsed: OutboundPayload = serde_json::from_str(&received[0]).unwrap();
    assert_eq!(parsed, payload);

    ctx.delete_queue(&queue_url).await.ok();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_batch_send_reports_delivered_count() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let queue_url = ctx.create_queue("qm-batch-queue").await.unwrap();
    ctx.purge_queue(&queue_url).await.ok();

    let queue = SqsQueue::new(ctx.sqs.clone(), &queue_url);
    let bodies = batch_bodies("bulk", 4, 1_700_000_000).unwrap();

    let outcome = queue.send_batch(bodies).await.unwrap();
    assert_eq!(outcome.delivered, 4);
    assert_eq!(outcome.attempted, 4);

    let count = ctx.get_queue_message_count(&queue_url).await.unwrap();
    assert_eq!(count, 4);

    ctx.delete_queue(&queue_url).await.ok();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_receive_loop_drains_queue_with_delete() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let queue_url = ctx.create_queue("qm-recv-queue").await.unwrap();
    ctx.purge_queue(&queue_url).await.ok();

    for i in 0..3 {
        ctx.send_message(&queue_url, &format!("job-{i}")).await.unwrap();
    }

    let queue = SqsQueue::new(ctx.sqs.clone(), &queue_url)
        .with_wait_time(1)
        .with_visibility_timeout(5);

    let options = ReceiveOptions {
        max: 10,
        delete_after_read: true,
    };

    let mut events = Vec::new();
    let total = receive_up_to(&queue, &options, |e| events.push(e))
        .await
        .unwrap();

    assert_eq!(total, 3);
    assert_eq!(
        events.iter().filter(|e| **e == ReceiveEvent::Deleted).count(),
        3
    );
    assert_eq!(events.last(), Some(&ReceiveEvent::EmptyPoll));

    let count = ctx.get_queue_message_count(&queue_url).await.unwrap();
    assert_eq!(count, 0);

    ctx.delete_queue(&queue_url).await.ok();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_receive_without_delete_leaves_message_on_queue() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let queue_url = ctx.create_queue("qm-retain-queue").await.unwrap();
    ctx.purge_queue(&queue_url).await.ok();
    ctx.send_message(&queue_url, "keep me").await.unwrap();

    let queue = SqsQueue::new(ctx.sqs.clone(), &queue_url)
        .with_wait_time(1)
        .with_visibility_timeout(1);

    let options = ReceiveOptions {
        max: 1,
        delete_after_read: false,
    };

    let mut events = Vec::new();
    let total = receive_up_to(&queue, &options, |e| events.push(e))
        .await
        .unwrap();

    assert_eq!(total, 1);
    assert_eq!(
        events,
        vec![
            ReceiveEvent::Message("keep me".to_string()),
            ReceiveEvent::Retained,
        ]
    );

    // After the visibility timeout lapses the message is back
    tokio::time::sleep(Duration::from_millis(1500)).await;
    let count = ctx.get_queue_message_count(&queue_url).await.unwrap();
    assert_eq!(count, 1);

    ctx.delete_queue(&queue_url).await.ok();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_purge_empties_queue() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let queue_url = ctx.create_queue("qm-purge-queue").await.unwrap();

    ctx.send_message(&queue_url, "stale-1").await.unwrap();
    ctx.send_message(&queue_url, "stale-2").await.unwrap();

    let queue = SqsQueue::new(ctx.sqs.clone(), &queue_url);
    queue.purge().await.unwrap();

    tokio::time::sleep(Duration::from_millis(200)).await;
    let count = ctx.get_queue_message_count(&queue_url).await.unwrap();
    assert_eq!(count, 0);

    ctx.delete_queue(&queue_url).await.ok();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_queue_name_resolves_to_url() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let queue_url = ctx.create_queue("qm-resolve-queue").await.unwrap();

    let locator = QueueLocator {
        queue_url: None,
        queue_name: Some("qm-resolve-queue".to_string()),
        from_tf: false,
    };

    let resolved = resolve_queue_url(&locator, &StaticOutputs::new(), &ctx.sqs)
        .await
        .unwrap();
    assert_eq!(resolved, queue_url);

    ctx.delete_queue(&queue_url).await.ok();
}
