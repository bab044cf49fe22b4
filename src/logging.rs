//! ログ出力の初期化
//!
//! `RUST_LOG` があればそれに従い、なければ `--verbose` の有無で既定レベルを決める。
//! 出力先は標準エラー（標準出力はプロンプトと結果表示に使う）。

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 既定のフィルタ
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "elfilter=debug"
    } else {
        "elfilter=warn"
    }
}

/// グローバルな subscriber を登録する（2回目以降は何もしない）
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
