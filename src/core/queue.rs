// 閉鎖可能な有界FIFOキュー
// tokio::sync::mpsc の上に、複数消費者で共有できる受信側を被せたもの

use super::error::{PipelineError, PipelineResult};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// 有界キューを作成する
///
/// 全ての `QueueProducer` が close（drop）されるとキューは閉鎖され、
/// 残りを取り出し終えた消費者は `take()` で `None` を受け取る
pub fn bounded_queue<T: Send>(
    name: &'static str,
    capacity: usize,
) -> PipelineResult<(QueueProducer<T>, QueueConsumer<T>)> {
    if capacity == 0 {
        return Err(PipelineError::configuration(format!(
            "{name} の容量は1以上である必要があります"
        )));
    }

    let (tx, rx) = mpsc::channel(capacity);
    Ok((
        QueueProducer { name, tx },
        QueueConsumer {
            rx: Arc::new(Mutex::new(rx)),
        },
    ))
}

/// キューの書き込み側ハンドル
#[derive(Debug)]
pub struct QueueProducer<T> {
    name: &'static str,
    tx: mpsc::Sender<T>,
}

impl<T> Clone for QueueProducer<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            tx: self.tx.clone(),
        }
    }
}

impl<T: Send> QueueProducer<T> {
    /// 1件追加する。満杯なら空きが出るまで待つ
    pub async fn put(&self, item: T) -> PipelineResult<()> {
        self.tx
            .send(item)
            .await
            .map_err(|_| PipelineError::queue_closed(self.name))
    }

    /// このハンドルを閉じる。ハンドルを消費するので二重には呼べない
    pub fn close(self) {
        drop(self);
    }
}

/// キューの読み出し側ハンドル。クローンして複数の消費者で奪い合う
#[derive(Debug)]
pub struct QueueConsumer<T> {
    rx: Arc<Mutex<mpsc::Receiver<T>>>,
}

impl<T> Clone for QueueConsumer<T> {
    fn clone(&self) -> Self {
        Self {
            rx: Arc::clone(&self.rx),
        }
    }
}

impl<T: Send> QueueConsumer<T> {
    /// 次の1件を取り出す。閉鎖済みかつ空なら `None`
    pub async fn take(&self) -> Option<T> {
        let mut rx = self.rx.lock().await;
        rx.recv().await
    }

    /// 閉鎖されるまで読み捨て、捨てた件数を返す
    pub async fn drain_and_discard(&self) -> usize {
        let mut discarded = 0;
        while self.take().await.is_some() {
            discarded += 1;
        }
        discarded
    }
}
