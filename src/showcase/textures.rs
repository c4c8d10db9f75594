use crate::loader::{AssetPoll, PendingAsset, TextureData};

/// Textures still loading, each tagged with the object it belongs to.
///
/// A finished texture is handed out once. A failed one is logged and
/// forgotten, its object keeps the plain color.
pub struct TextureQueue<K> {
    pending: Vec<(K, PendingAsset<TextureData>)>,
}

impl<K: Copy> TextureQueue<K> {
    /// An empty queue.
    pub fn new() -> Self {
        TextureQueue {
            pending: Vec::new(),
        }
    }

    /// Waits on `texture` for the object `key`.
    pub fn request(&mut self, key: K, texture: PendingAsset<TextureData>) {
        self.pending.push((key, texture));
    }

    /// Number of textures not settled yet.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether every texture has been settled.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Polls every pending texture once and passes the finished ones to
    /// `apply`. Returns the number applied.
    pub fn poll(&mut self, mut apply: impl FnMut(K, TextureData)) -> usize {
        let mut applied = 0;

        self.pending.retain_mut(|(key, texture)| match texture.poll() {
            AssetPoll::Pending => true,
            AssetPoll::Ready(data) => {
                apply(*key, data);
                applied += 1;
                false
            }
            AssetPoll::Failed(e) => {
                log::debug!("texture {} not applied: {}", texture.label(), e);
                false
            }
        });

        applied
    }
}

impl<K: Copy> Default for TextureQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoadError;
    use image::DynamicImage;

    fn texture(name: &str) -> TextureData {
        TextureData {
            name: name.to_string(),
            image: DynamicImage::new_rgb8(1, 1),
        }
    }

    #[test]
    fn ready_texture_is_applied_once() {
        let mut queue = TextureQueue::new();
        let (completer, pending) = PendingAsset::manual("torus.png");
        queue.request(7u8, pending);

        let mut seen = Vec::new();
        assert_eq!(queue.poll(|k, t| seen.push((k, t.name))), 0);
        assert_eq!(queue.len(), 1);

        completer.complete(Ok(texture("torus")));
        assert_eq!(queue.poll(|k, t| seen.push((k, t.name))), 1);
        assert_eq!(queue.poll(|k, t| seen.push((k, t.name))), 0);

        assert_eq!(seen, vec![(7, "torus".to_string())]);
        assert!(queue.is_empty());
    }

    #[test]
    fn failed_texture_is_dropped() {
        let mut queue = TextureQueue::new();
        queue.request(
            0u8,
            PendingAsset::resolved("ground.png", Err(LoadError::Disconnected)),
        );
        queue.request(1u8, PendingAsset::resolved("torus.png", Ok(texture("torus"))));

        let mut keys = Vec::new();
        assert_eq!(queue.poll(|k, _| keys.push(k)), 1);
        assert_eq!(keys, vec![1]);
        assert!(queue.is_empty());
    }

    #[test]
    fn missing_file_settles_without_applying() {
        let mut queue = TextureQueue::new();
        queue.request((), crate::loader::spawn_texture("no/such/texture.png"));

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
        let mut applied = 0;
        while !queue.is_empty() && std::time::Instant::now() < deadline {
            applied += queue.poll(|_, _| ());
            std::thread::sleep(std::time::Duration::from_millis(1));
        }

        assert!(queue.is_empty());
        assert_eq!(applied, 0);
    }
}
