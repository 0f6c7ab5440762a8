// BBCode模板渲染
// 开发心理：纯字符串替换，不掺杂业务逻辑，唯一的分支是组标签的二选一
// 设计原则：保持条目顺序、替换可逆（名称与立绘链接原样出现在输出中）

use crate::pokemon::info::GachaEntry;

// 输出头部
pub const HEADER: &str = "[nospaces]";

// 输出尾部
pub const FOOTER: &str = r#"[attr="class","pokegachatag"]@tag[/div]"#;

// 高级扭蛋组标签（限定属性时使用）
pub const PREMIUM_LABEL: &str = "PREMIUM GACHAPON";

// 普通扭蛋组标签
pub const NORMAL_LABEL: &str = "NORMAL GACHAPON";

// 渲染单只宝可梦的展示盒
pub fn render_entry(entry: &GachaEntry) -> String {
    let sprite = entry.sprite_url.as_deref().unwrap_or("");
    format!(
        "\n[div][attr=\"class\",\"pokegachabox\"]\n  [img src=\"{}\" alt=\"{}\"]\n  [div][attr=\"class\",\"pokegachaname\"]{}[/div]\n  [/div]\n",
        sprite, entry.display_name, entry.display_name
    )
}

// 渲染一组扭蛋，premium决定组标签
pub fn render_set(entries: &[GachaEntry], premium: bool) -> String {
    let label = if premium { PREMIUM_LABEL } else { NORMAL_LABEL };
    let boxes = entries
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
      [div][attr="class","pokegacha"]

      [div][attr="class","pokegachabar"]
        [div]x[/div]
        [div]□[/div]
        [div]-[/div][i][attr="class","icon-ball2"][/i]{}
      [/div]

      [div][attr="class","pokegachasmmn"]

      {}

              [/div]
      [div][attr="class","pokegachabtm"]
        [a href="https://pokeapi.co/"]
          [div][attr="class","pokegachabttn"]
            [div][attr="class","pokegachabttn2"][/div][span style="top: auto;"]info[/span]
          [/div]
        [/a]
        [a href="https://pokeapi.co/"]
          [div][attr="class","pokegachabttn"]
            [div][attr="class","pokegachabttn2"][/div][span style="top: auto;"]shop[/span]
          [/div]
        [/a]
      [/div]
    [/div]
    [div]"#,
        label, boxes
    )
}

// 渲染完整输出：头部 + 各组拼接 + 尾部
pub fn render_envelope(sets: &[String]) -> String {
    format!("{}\n{}\n{}", HEADER, sets.concat(), FOOTER)
}
