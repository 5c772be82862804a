use lib::service::common_structs::{Emotion, EmotionScores};
use lib::utilities::escape_html;


const STYLE: &str = r#"
        body {
            font-family: 'Arial', sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            color: #333;
        }
        .container {
            background: white;
            border-radius: 15px;
            padding: 30px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.3);
        }
        h1 { text-align: center; color: #4a5568; margin-bottom: 30px; }
        label { display: block; margin-bottom: 8px; font-weight: bold; color: #2d3748; }
        textarea {
            width: 100%;
            min-height: 120px;
            padding: 12px;
            border: 2px solid #e2e8f0;
            border-radius: 8px;
            font-size: 16px;
            box-sizing: border-box;
        }
        .btn {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 12px 30px;
            border: none;
            border-radius: 25px;
            font-size: 16px;
            text-decoration: none;
            display: inline-block;
            margin-top: 20px;
            cursor: pointer;
        }
        .centered { text-align: center; }
        .description, .analysis-input {
            background: #f7fafc;
            padding: 15px;
            border-radius: 8px;
            margin-bottom: 25px;
            border-left: 4px solid #667eea;
        }
        .emotion-item {
            padding: 10px;
            margin: 8px 0;
            background: #f8f9fa;
            border-radius: 5px;
            border-left: 3px solid #667eea;
        }
        .dominant-emotion {
            background: linear-gradient(135deg, #48bb78, #38a169);
            color: white;
            padding: 20px;
            border-radius: 10px;
            text-align: center;
            margin: 25px 0;
        }
        .notice { color: #b7791f; font-style: italic; }
        .error-message { color: #e53e3e; font-size: 1.2em; margin: 20px 0; }
        .footer { text-align: center; margin-top: 30px; color: #718096; font-size: 14px; }
"#;

fn layout(title: &str, content: &str) -> String {
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    <div class="container">
{content}
        <div class="footer"><p>Powered by Watson NLP</p></div>
    </div>
</body>
</html>
"#)
}

fn error_page(heading: &str, message: &str) -> String {
    layout("Error - Emotion Detection", &format!(r#"
        <div class="centered">
            <h1>{heading}</h1>
            <div class="error-message">{message}</div>
            <a href="/" class="btn">Go Back</a>
        </div>"#))
}


pub fn index_page() -> String {
    layout("AI-Based Emotion Detection", r#"
        <h1>AI-Based Emotion Detection</h1>
        <div class="description">
            <p>Enter any text below to analyze its emotional content.
               Scores are reported for anger, disgust, fear, joy and sadness.</p>
        </div>
        <form action="/emotionDetector" method="POST">
            <label for="textToAnalyze">Enter text to analyze:</label>
            <textarea name="textToAnalyze" id="textToAnalyze" required></textarea>
            <div class="centered"><button type="submit" class="btn">Run Emotion Analysis</button></div>
        </form>"#)
}

pub fn invalid_input_page() -> String {
    error_page("Invalid Input", "Invalid text! Please provide some text to analyze.")
}

pub fn processing_error_page() -> String {
    error_page(
        "Processing Error",
        "Unable to process the text for emotion analysis. Please try again with different text.",
    )
}

pub fn unavailable_page() -> String {
    error_page(
        "Service Unavailable",
        "The emotion service is currently unavailable. Please try again later.",
    )
}

pub fn results_page(text: &str, scores: &EmotionScores, dominant: Emotion, mocked: bool) -> String {
    let items = Emotion::ALL
        .iter()
        .map(|emotion| format!(
            r#"            <div class="emotion-item"><strong>{}:</strong> {}</div>"#,
            emotion.label(),
            scores.score(*emotion)
        ))
        .collect::<Vec<String>>()
        .join("\n");

    let notice = if mocked {
        r#"<p class="notice">The emotion service could not be reached. Sample scores are shown instead.</p>"#
    } else {
        ""
    };

    layout("Results - Emotion Detection", &format!(r#"
        <h1>AI-Based Emotion Detection</h1>
        <h2>Emotion Analysis Results</h2>
        {notice}
        <div class="analysis-input"><strong>Analyzed Text:</strong> "{text}"</div>
        <div class="emotion-scores">
            <h3>Emotion Scores:</h3>
{items}
        </div>
        <div class="dominant-emotion">
            <h3>Dominant Emotion: <span class="highlight">{dominant}</span></h3>
        </div>
        <div class="centered"><a href="/" class="btn">Analyze Another Text</a></div>"#,
        text = escape_html(text),
        dominant = dominant.label(),
    ))
}
