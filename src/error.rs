//! 统一错误处理 - 核心操作不会失败，错误只出现在读取语料、配置与调优边界

/// 单词集合可能发生的错误
#[derive(Debug, thiserror::Error)]
pub enum WordSetError {
    #[error("读取语料失败: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("无效哈希权重: {reason}")]
    InvalidWeights {
        reason: String,
    },

    #[error("无效调优配置: {reason}")]
    InvalidTunerConfig {
        reason: String,
    },

    #[error("语料为空，无法评估哈希分布")]
    EmptyCorpus,
}

impl WordSetError {
    /// 获取错误恢复建议
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => Some("检查文件路径与读取权限"),
            Self::InvalidWeights { .. } => Some("所有乘数必须不小于1"),
            Self::InvalidTunerConfig { .. } => Some("检查种群大小、代数与概率参数"),
            Self::EmptyCorpus => Some("提供至少一个非空单词"),
        }
    }

    /// 判断错误是否可恢复
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, WordSetError>;
