//! 翻译结果缓存
//!
//! 以 (原文, 目标语言) 为键的本地 LRU 缓存，由单个翻译客户端独占。

use std::num::NonZeroUsize;

use blake3::Hasher;
use lru::LruCache;

/// 生成缓存键
pub fn generate_key(text: &str, target_lang: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(target_lang.as_bytes());
    hasher.update(&[0]);
    hasher.update(text.as_bytes());
    format!("trans:{}", hasher.finalize().to_hex())
}

/// 本地LRU缓存
pub struct TranslationCache {
    // 容量为 0 时不缓存
    entries: Option<LruCache<String, String>>,
    hits: u64,
    misses: u64,
}

impl TranslationCache {
    /// 创建新的本地缓存
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(LruCache::new),
            hits: 0,
            misses: 0,
        }
    }

    /// 获取缓存项
    pub fn get(&mut self, text: &str, target_lang: &str) -> Option<String> {
        let entries = self.entries.as_mut()?;
        match entries.get(&generate_key(text, target_lang)) {
            Some(translation) => {
                self.hits += 1;
                Some(translation.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// 设置缓存项
    pub fn put(&mut self, text: &str, target_lang: &str, translation: String) {
        if let Some(entries) = self.entries.as_mut() {
            entries.put(generate_key(text, target_lang), translation);
        }
    }

    /// 清空缓存
    pub fn clear(&mut self) {
        if let Some(entries) = self.entries.as_mut() {
            entries.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, LruCache::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 命中与未命中次数
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
