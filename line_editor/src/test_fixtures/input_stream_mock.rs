// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use async_stream::stream;

use crate::PinnedInputStream;

pub fn gen_input_stream<T>(generator_vec: Vec<T>) -> PinnedInputStream<T>
where
    T: 'static,
{
    let it = stream! {
        for item in generator_vec {
            yield item;
        }
    };
    Box::pin(it)
}

pub fn gen_input_stream_with_delay<T>(
    generator_vec: Vec<T>,
    delay: Duration,
) -> PinnedInputStream<T>
where
    T: 'static,
{
    let it = stream! {
        for item in generator_vec {
            tokio::time::sleep(delay).await;
            yield item;
        }
    };
    Box::pin(it)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_gen_input_stream() {
        let mut input_stream = gen_input_stream(vec![1, 2]);
        assert_eq!(input_stream.next().await, Some(1));
        assert_eq!(input_stream.next().await, Some(2));
        assert_eq!(input_stream.next().await, None);
    }

    #[tokio::test]
    async fn test_gen_input_stream_with_delay() {
        const DELAY: u64 = 20;

        let start = tokio::time::Instant::now();
        let mut input_stream =
            gen_input_stream_with_delay(vec!['a', 'b'], Duration::from_millis(DELAY));
        assert_eq!(input_stream.next().await, Some('a'));
        assert_eq!(input_stream.next().await, Some('b'));
        assert_eq!(input_stream.next().await, None);
        assert!(start.elapsed() >= Duration::from_millis(DELAY * 2));
    }
}
