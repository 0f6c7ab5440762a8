/*
* 开发心理过程：
* 1. 实现无放回的均匀随机抽样，输出数量精确、元素互不重复
* 2. 抽样函数保持纯函数形态（无I/O），随机源由调用方注入
* 3. 对拷贝后的池做swap_remove，原始输入池保持不变
* 4. 编号抽样用拒绝采样去重，集合达到目标大小即停止
*/

use rand::Rng;
use std::collections::BTreeSet;

use crate::core::error::{GachaError, Result};

/// 从候选池中无放回地均匀抽取count个元素
///
/// 输入池不会被修改；失败时报告实际可用数量
pub fn sample_from_pool<T: Clone, R: Rng>(
    pool: &[T],
    count: usize,
    rng: &mut R,
) -> Result<Vec<T>> {
    if count > pool.len() {
        return Err(GachaError::InsufficientCandidates(pool.len()));
    }

    let mut remaining = pool.to_vec();
    let mut selected = Vec::with_capacity(count);
    for _ in 0..count {
        let index = rng.gen_range(0..remaining.len());
        selected.push(remaining.swap_remove(index));
    }
    Ok(selected)
}

/// 从[1, upper_bound]中抽取count个互不重复的编号
///
/// 对重复值做拒绝采样；count超过范围大小时失败并报告范围大小
pub fn sample_id_range<R: Rng>(count: usize, upper_bound: u32, rng: &mut R) -> Result<BTreeSet<u32>> {
    if count > upper_bound as usize {
        return Err(GachaError::InsufficientCandidates(upper_bound as usize));
    }

    let mut ids = BTreeSet::new();
    while ids.len() < count {
        ids.insert(rng.gen_range(1..=upper_bound));
    }
    Ok(ids)
}
