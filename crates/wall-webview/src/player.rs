//! Player page generation.
//!
//! A channel URL is resolved to an embeddable stream, then wrapped in a small
//! page that drives the embedded player API and reports back over IPC.

use serde::Serialize;
use url::Url;

/// What the embedded player should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerSource {
    /// A single video or live broadcast id.
    Video(String),
    /// The current live stream of a channel (`UC…` id).
    LiveChannel(String),
}

/// Resolve a channel URL into a player source.
///
/// `?v=<id>` wins, then `/channel/UC…` paths. Anything else is taken to
/// end in a video id (`youtu.be/<id>`, `/live/<id>`). A URL without a
/// scheme is read as `https://`.
pub fn resolve_source(url: &str) -> PlayerSource {
    let Some(parsed) = parse_channel_url(url) else {
        return PlayerSource::Video(String::new());
    };

    if let Some((_, v)) = parsed
        .query_pairs()
        .find(|(k, v)| k == "v" && !v.is_empty())
    {
        return PlayerSource::Video(sanitize_id(&v));
    }

    let segments: Vec<String> = parsed
        .path_segments()
        .map(|segs| {
            segs.filter(|s| !s.is_empty())
                .map(percent_decode)
                .collect()
        })
        .unwrap_or_default();

    if let Some(idx) = segments.iter().position(|s| s == "channel") {
        if let Some(cand) = segments.get(idx + 1) {
            if cand.starts_with("UC") {
                return PlayerSource::LiveChannel(sanitize_id(cand));
            }
        }
    }

    let last = segments.last().map(String::as_str).unwrap_or_default();
    PlayerSource::Video(sanitize_id(last))
}

fn parse_channel_url(raw: &str) -> Option<Url> {
    let raw = raw.trim();
    match Url::parse(raw) {
        Ok(url) if url.has_host() => Some(url),
        Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{raw}")).ok()
        }
        Err(e) => {
            tracing::debug!(url = raw, error = %e, "unparseable channel url");
            None
        }
    }
}

/// Path segments come back percent-encoded; decode them the same way
/// `query_pairs` decodes the query.
fn percent_decode(segment: &str) -> String {
    url::form_urlencoded::parse(format!("s={}", segment.replace('+', "%2B")).as_bytes())
        .next()
        .map(|(_, v)| v.into_owned())
        .unwrap_or_default()
}

/// Embed URL for a source, without the `origin` parameter (the page adds
/// its own origin at runtime).
pub fn embed_src(source: &PlayerSource, show_controls: bool) -> String {
    let controls = u8::from(show_controls);
    let params = format!(
        "autoplay=1&mute=1&playsinline=1&controls={controls}&rel=0&modestbranding=1&enablejsapi=1"
    );
    match source {
        PlayerSource::Video(id) => format!("https://www.youtube.com/embed/{id}?{params}"),
        PlayerSource::LiveChannel(id) => {
            format!("https://www.youtube.com/embed/live_stream?channel={id}&{params}")
        }
    }
}

#[derive(Serialize)]
struct PageParams<'a> {
    gen: u64,
    src: &'a str,
    controls: bool,
}

/// Full player page for one load of a surface.
///
/// The page starts muted, tags every message it posts with `generation`,
/// and exposes `window.newswall.{play,pause,mute,position}` for commands.
/// With native controls hidden, a transparent layer over the player turns
/// clicks into gesture messages; with controls shown the player keeps its
/// clicks and focus moving into it counts as a click.
pub fn player_html(source: &PlayerSource, generation: u64, show_controls: bool) -> String {
    let src = embed_src(source, show_controls);
    let params = PageParams {
        gen: generation,
        src: &src,
        controls: show_controls,
    };
    let params_json = serde_json::to_string(&params).unwrap_or_else(|_| "{}".to_string());
    let hit_layer = if show_controls {
        ""
    } else {
        r#"<div id="hit"></div>"#
    };

    format!(
        r#"<!doctype html><html><head><meta name="viewport" content="width=device-width,initial-scale=1">
<style>
  html,body,#host{{margin:0;height:100%;background:#000;overflow:hidden}}
  #frame{{position:absolute;inset:0;width:100%;height:100%;border:0}}
  #hit{{position:absolute;inset:0;background:transparent;cursor:pointer}}
</style>
</head><body>
<div id="host">
  <iframe id="frame" allow="autoplay; encrypted-media; picture-in-picture"></iframe>
  {hit_layer}
</div>
<script>
{PAGE_SCRIPT}
window.newswall.boot({params_json});
</script>
</body></html>"#
    )
}

const PAGE_SCRIPT: &str = r#"
(function() {
    var gen = 0, player = null, ready = false;
    function post(msg) {
        msg.gen = gen;
        try { window.ipc.postMessage(JSON.stringify(msg)); } catch (e) {}
    }
    function call(fn) {
        if (!player) return;
        try { fn(player); } catch (e) {}
    }
    function currentTime() {
        if (!ready || !player || !player.getCurrentTime) return -1;
        try {
            var t = player.getCurrentTime();
            return (typeof t === 'number' && isFinite(t)) ? t : -1;
        } catch (e) { return -1; }
    }
    window.newswall = {
        boot: function(params) {
            gen = params.gen;
            var frame = document.getElementById('frame');
            frame.src = params.src + '&origin=' + encodeURIComponent(location.origin);

            var hit = document.getElementById('hit');
            if (hit) {
                hit.addEventListener('click', function() { post({type: 'gesture', kind: 'click'}); });
                hit.addEventListener('dblclick', function() { post({type: 'gesture', kind: 'dblclick'}); });
            } else {
                window.addEventListener('blur', function() {
                    if (document.activeElement === frame) post({type: 'gesture', kind: 'click'});
                });
            }

            window.onYouTubeIframeAPIReady = function() {
                player = new YT.Player('frame', {
                    events: {
                        onReady: function(e) {
                            ready = true;
                            try { e.target.mute(); e.target.playVideo(); } catch (_) {}
                            post({type: 'ready'});
                        }
                    }
                });
                setInterval(function() {
                    if (!ready) return;
                    var buf = 0;
                    try { buf = player.getVideoLoadedFraction ? player.getVideoLoadedFraction() : 0; } catch (e) {}
                    post({type: 'stats', time: currentTime(), buf: buf});
                }, 1000);
            };
            var s = document.createElement('script');
            s.src = 'https://www.youtube.com/iframe_api';
            document.head.appendChild(s);
        },
        play: function() { call(function(p) { p.playVideo(); }); },
        pause: function() { call(function(p) { p.pauseVideo(); }); },
        mute: function(on) { call(function(p) { if (on) { p.mute(); } else { p.unMute(); } }); },
        position: function(seq) { post({type: 'position', seq: seq, time: currentTime()}); }
    };
})();
"#;

/// Keep only characters that can appear in a stream id.
fn sanitize_id(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}
