use anyhow::{anyhow, bail, Context};
use log::{error, info};
use tracing_subscriber::EnvFilter;

use cam_settings::{CameraSettings, FileStorage, LoadOutcome, StorageConfig};

const USAGE: &str = "usage: config_check [<config file>] [--write <output file>]";

/// ログ出力を初期化します
///
/// 既定のレベルは `info` で、`RUST_LOG` が設定されていればそちらを優先します。
/// 標準出力はJSON用のため、ログは標準エラー出力へ書き込みます。
fn init_logger() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow!("ログレベルの設定が不正です: {}", e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("ロガーを初期化できません: {}", e))
}

/// 設定ファイルを検証し、JSONとして出力する開発用ツール
///
/// 引数を省略した場合は `cfg.toml` の `settings_path` を読み込みます。
fn main() -> anyhow::Result<()> {
    init_logger()?;

    let mut input = None;
    let mut output = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--write" => {
                let Some(path) = args.next() else {
                    bail!("--write requires a path\n{}", USAGE);
                };
                output = Some(path);
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ if input.is_none() => input = Some(arg),
            _ => bail!("unexpected argument '{}'\n{}", arg, USAGE),
        }
    }

    let storage_config = match input {
        Some(path) => StorageConfig::load().with_path(path),
        None => StorageConfig::load(),
    };
    let storage = FileStorage::new(storage_config);

    // 設定ファイル読み込み
    let mut settings = CameraSettings::default();
    let outcome = settings.load_from(&storage).map_err(|e| {
        error!("設定ファイルの読み込みに失敗しました: {}", e);
        anyhow!("設定ファイルの読み込みエラー ({:?}): {}", storage.path(), e)
    })?;

    match outcome {
        LoadOutcome::NotFound => {
            eprintln!("{:?} が見つかりません。デフォルト値を表示します", storage.path())
        }
        LoadOutcome::Loaded { applied, ignored } => {
            eprintln!("{} 件を適用、{} 件を無視しました", applied, ignored)
        }
    }

    println!("{}", settings.to_json());

    if let Some(path) = output {
        let mut out = FileStorage::at_path(&path);
        settings
            .save_to(&mut out)
            .with_context(|| format!("{} へ書き込めません", path))?;
        info!("正規化した設定を {} へ書き込みました", path);
    }

    Ok(())
}
