//! Static sample data the generators draw from.

/// Tag vocabulary; tag sets are sampled from here without replacement.
pub const TAGS: [&str; 10] = [
    "python",
    "javascript",
    "chrome-extension",
    "automation",
    "api",
    "testing",
    "random",
    "example",
    "development",
    "snippet",
];

pub const TOP_DOMAINS: [&str; 22] = [
    "google.com",
    "youtube.com",
    "facebook.com",
    "baidu.com",
    "wikipedia.org",
    "reddit.com",
    "yahoo.com",
    "qq.com",
    "taobao.com",
    "amazon.com",
    "tmall.com",
    "twitter.com",
    "instagram.com",
    "vk.com",
    "live.com",
    "sohu.com",
    "sina.com.cn",
    "jd.com",
    "weibo.com",
    "360.cn",
    "linkedin.com",
    "netflix.com",
];

pub const SUBJECTS: [&str; 5] = ["The cat", "A dog", "The bird", "A fish", "The monkey"];

pub const VERBS: [&str; 5] = ["jumps", "runs", "flies", "swims", "climbs"];

pub const OBJECTS: [&str; 5] = [
    "over the fence",
    "in the park",
    "through the sky",
    "in the water",
    "up the tree",
];

pub const QUOTES: [&str; 5] = [
    "To be or not to be, that is the question.",
    "The only thing we have to fear is fear itself.",
    "I think, therefore I am.",
    "The unexamined life is not worth living.",
    "To infinity and beyond!",
];
