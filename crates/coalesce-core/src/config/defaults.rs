// Single source of truth for all default values.

// --- Workspace ---
pub const DEFAULT_STORE_FILENAME: &str = "production.db";
pub const DEFAULT_PROJECT_CONFIG_FILENAME: &str = "coalesce.toml";
pub const DEFAULT_FORBIDDEN_PATTERNS: &[&str] = &["*backup*", "*_backup_*", "backups"];
pub const DEFAULT_SCAN_MAX_DEPTH: usize = 8;

// --- Extraction ---
pub const DEFAULT_MAX_SOURCE_BYTES: usize = 1_048_576; // 1 MB
pub const DEFAULT_MAX_TOKENS: usize = 10_000;
pub const DEFAULT_PATTERN_CACHE_CAPACITY: u64 = 10_000;
pub const STRUCTURAL_CONFIDENCE: f64 = 0.95;
pub const FALLBACK_CONFIDENCE: f64 = 0.5;
pub const TIER_LOW_MAX_NODES: usize = 50;
pub const TIER_MEDIUM_MAX_NODES: usize = 200;
pub const TIER_HIGH_MAX_NODES: usize = 500;

// --- Similarity ---
pub const DEFAULT_DISCOVERY_THRESHOLD: f64 = 0.75;
pub const DEFAULT_HIGH_PRIORITY_THRESHOLD: f64 = 0.9;
pub const SAME_CATEGORY_SIMILARITY: f64 = 0.8;
pub const CROSS_CATEGORY_SIMILARITY: f64 = 0.3;
pub const DEFAULT_MAX_BATCH_PATTERNS: usize = 2_000;

// --- Prediction ---
pub const DEFAULT_PROBABILITY_CUTOFF: f64 = 0.6;
pub const DEFAULT_LABEL_THRESHOLD: f64 = 0.7;
pub const DEFAULT_MIN_TRAINING_SAMPLES: usize = 10;
pub const DEFAULT_TEST_FRACTION: f64 = 0.2;
pub const DEFAULT_EPOCHS: usize = 500;
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_L2_PENALTY: f64 = 0.001;
pub const TRAINED_CONFIDENCE: f64 = 0.85;
pub const HEURISTIC_CONFIDENCE: f64 = 0.6;
pub const NO_BACKEND_ACCURACY: f64 = 0.85;
pub const INSUFFICIENT_DATA_ACCURACY: f64 = 0.75;
pub const TRAINING_FAILURE_ACCURACY: f64 = 0.70;
pub const MISSING_SCORE_FEATURE: f64 = 0.5;
pub const MISSING_SIZE_FEATURE: f64 = 1_000.0;

// --- Monitor ---
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 10_000;
pub const DEFAULT_HEALTH_CHECK_INTERVAL_MS: u64 = 60_000;
pub const DEFAULT_OPTIMIZATION_INTERVAL_MS: u64 = 1_800_000; // 30 minutes
pub const HEALTH_BASELINE: f64 = 100.0;
pub const DEFAULT_WORKSPACE_MISSING_PENALTY: f64 = 30.0;
pub const DEFAULT_STORE_MISSING_PENALTY: f64 = 20.0;
pub const DEFAULT_FORBIDDEN_PATH_PENALTY: f64 = 25.0;
pub const DEFAULT_CHECK_FAILED_SCORE: f64 = 75.0;
pub const DEFAULT_DEGRADED_HEALTH_THRESHOLD: f64 = 90.0;
pub const DEFAULT_OPTIMIZATION_CATALOGUE: &[(&str, f64)] = &[
    ("workspace_organization", 2.5),
    ("database_optimization", 1.8),
    ("cache_cleanup", 3.2),
    ("performance_tuning", 2.1),
];

// --- Gateway ---
pub const ENTERPRISE_READY_COMPLIANCE: f64 = 95.0;

// --- Logging ---
pub const LOG_ENV_VAR: &str = "COALESCE_LOG";
pub const DEFAULT_LOG_FILTER: &str = "coalesce=info";
