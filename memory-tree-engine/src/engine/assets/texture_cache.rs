use std::collections::HashMap;

use bevy::prelude::*;

/// Result of asking the cache for a URL.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup<H> {
    /// Already loaded.
    Ready(H),
    /// Another photo is loading the same URL.
    Shared(H),
    /// A new load was started by this request.
    Started(H),
}

/// Deduplicates image loads by URL. Each URL is loaded at most once while it
/// is in flight or ready; failures are forgotten so a later request retries.
#[derive(Debug, Clone)]
pub struct TextureCache<H> {
    ready: HashMap<String, H>,
    in_flight: HashMap<String, H>,
}

impl<H> Default for TextureCache<H> {
    fn default() -> Self {
        Self {
            ready: HashMap::new(),
            in_flight: HashMap::new(),
        }
    }
}

impl<H: Clone> TextureCache<H> {
    /// Looks `url` up, calling `start` only when nothing is cached or loading.
    pub fn request(&mut self, url: &str, start: impl FnOnce(&str) -> H) -> CacheLookup<H> {
        if let Some(handle) = self.ready.get(url) {
            return CacheLookup::Ready(handle.clone());
        }
        if let Some(handle) = self.in_flight.get(url) {
            return CacheLookup::Shared(handle.clone());
        }
        let handle = start(url);
        self.in_flight.insert(url.to_string(), handle.clone());
        CacheLookup::Started(handle)
    }

    /// Marks an in-flight URL as loaded. Returns true only the first time.
    pub fn complete(&mut self, url: &str) -> bool {
        match self.in_flight.remove(url) {
            Some(handle) => {
                self.ready.insert(url.to_string(), handle);
                true
            }
            None => false,
        }
    }

    /// Drops an in-flight URL after a failed load.
    pub fn fail(&mut self, url: &str) -> Option<H> {
        self.in_flight.remove(url)
    }

    pub fn is_ready(&self, url: &str) -> bool {
        self.ready.contains_key(url)
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }
}

/// Image cache used by the photo panels.
#[derive(Resource, Debug, Clone, Default)]
pub struct PhotoTextureCache(pub TextureCache<Handle<Image>>);

/// Load state of one photo's texture.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TextureSlot<H> {
    #[default]
    Unrequested,
    Loading {
        url: String,
        handle: H,
        /// True once the fallback image is being tried.
        fallback: bool,
    },
    Ready(H),
    /// Both the photo and the fallback failed.
    Errored,
}

/// What the caller should do after a slot reacted to a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotFailure {
    /// Start loading this URL as the single retry.
    RetryWith(String),
    /// No retry left; the slot is now `Errored`.
    GaveUp,
    /// The slot was not loading.
    NotLoading,
}

impl<H: Clone> TextureSlot<H> {
    pub fn is_errored(&self) -> bool {
        matches!(self, TextureSlot::Errored)
    }

    /// Starts loading `url` through `cache`. Cache hits go straight to `Ready`.
    pub fn begin(
        &mut self,
        cache: &mut TextureCache<H>,
        url: &str,
        fallback: bool,
        start: impl FnOnce(&str) -> H,
    ) {
        *self = match cache.request(url, start) {
            CacheLookup::Ready(handle) => TextureSlot::Ready(handle),
            CacheLookup::Shared(handle) | CacheLookup::Started(handle) => TextureSlot::Loading {
                url: url.to_string(),
                handle,
                fallback,
            },
        };
    }

    /// Moves a loading slot to `Ready`.
    pub fn finish(&mut self, cache: &mut TextureCache<H>) {
        if let TextureSlot::Loading { url, handle, .. } = self {
            cache.complete(url);
            let handle = handle.clone();
            *self = TextureSlot::Ready(handle);
        }
    }

    /// Reacts to a failed load. The first failure asks for a retry with
    /// `fallback_url`; a failure of the fallback is terminal.
    pub fn fail(&mut self, cache: &mut TextureCache<H>, fallback_url: &str) -> SlotFailure {
        let TextureSlot::Loading { url, fallback, .. } = self else {
            return SlotFailure::NotLoading;
        };
        cache.fail(url);
        if *fallback || url.as_str() == fallback_url {
            *self = TextureSlot::Errored;
            SlotFailure::GaveUp
        } else {
            SlotFailure::RetryWith(fallback_url.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> impl FnMut(&str) -> u32 {
        let mut next = 0;
        move |_| {
            next += 1;
            next
        }
    }

    #[test]
    fn second_request_shares_in_flight_load() {
        let mut cache = TextureCache::default();
        let mut start = counter();
        assert_eq!(cache.request("a.png", &mut start), CacheLookup::Started(1));
        assert_eq!(cache.request("a.png", &mut start), CacheLookup::Shared(1));
        assert_eq!(cache.in_flight_count(), 1);
    }

    #[test]
    fn complete_moves_to_ready_once() {
        let mut cache = TextureCache::default();
        cache.request("a.png", |_| 5u32);
        assert!(cache.complete("a.png"));
        assert!(!cache.complete("a.png"));
        assert!(cache.is_ready("a.png"));
        assert_eq!(cache.request("a.png", |_| 6), CacheLookup::Ready(5));
    }

    #[test]
    fn failed_url_is_retried_on_next_request() {
        let mut cache = TextureCache::default();
        cache.request("a.png", |_| 1u32);
        assert_eq!(cache.fail("a.png"), Some(1));
        assert_eq!(cache.request("a.png", |_| 2), CacheLookup::Started(2));
    }

    #[test]
    fn slot_retries_once_with_fallback() {
        let mut cache = TextureCache::default();
        let mut slot = TextureSlot::Unrequested;
        slot.begin(&mut cache, "photo.png", false, |_| 1u32);

        let failure = slot.fail(&mut cache, "fallback.png");
        assert_eq!(failure, SlotFailure::RetryWith("fallback.png".to_string()));

        slot.begin(&mut cache, "fallback.png", true, |_| 2);
        assert_eq!(slot.fail(&mut cache, "fallback.png"), SlotFailure::GaveUp);
        assert!(slot.is_errored());
        assert_eq!(cache.in_flight_count(), 0);
    }

    #[test]
    fn slot_for_cached_url_is_ready_immediately() {
        let mut cache = TextureCache::default();
        let mut first = TextureSlot::Unrequested;
        first.begin(&mut cache, "a.png", false, |_| 3u32);
        first.finish(&mut cache);
        assert_eq!(first, TextureSlot::Ready(3));

        let mut second = TextureSlot::Unrequested;
        second.begin(&mut cache, "a.png", false, |_| 4);
        assert_eq!(second, TextureSlot::Ready(3));
    }

    #[test]
    fn failing_idle_slot_is_a_no_op() {
        let mut cache: TextureCache<u32> = TextureCache::default();
        let mut slot = TextureSlot::Unrequested;
        assert_eq!(slot.fail(&mut cache, "fallback.png"), SlotFailure::NotLoading);
        assert_eq!(slot, TextureSlot::Unrequested);
    }
}
